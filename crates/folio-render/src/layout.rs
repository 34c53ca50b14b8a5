//! Page shell: document wrapper, navigation bars, footer, and section frame.

use crate::context::SiteContext;
use crate::html::escape;

/// Wrap a body in a complete HTML document.
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"ja\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title></head>\
<body class=\"min-h-screen bg-white\">{body}</body></html>\n",
        escape(title)
    )
}

/// Navigation bar for the listing page; links are in-page anchors.
pub fn home_nav(site_title: &str) -> String {
    format!(
        "<nav class=\"site-nav fixed top-0 left-0 right-0 bg-white/95 border-b border-border z-50\">\
<div class=\"max-w-5xl mx-auto px-4 md:px-8 py-4 flex justify-between items-center\">\
<a href=\"#\" class=\"text-lg font-semibold\">{}</a>\
<div class=\"flex gap-8 items-center\">\
<a href=\"#about\" class=\"text-sm text-muted-foreground\">About</a>\
<a href=\"#works\" class=\"text-sm text-muted-foreground\">Works</a>\
<a href=\"#contact\" class=\"text-sm text-muted-foreground\">Contact</a>\
</div></div></nav>",
        escape(site_title)
    )
}

/// Navigation bar for detail and fallback pages; links lead back home.
pub fn detail_nav(ctx: &SiteContext, site_title: &str) -> String {
    format!(
        "<nav class=\"site-nav fixed top-0 left-0 right-0 bg-white/95 border-b border-border z-50\">\
<div class=\"max-w-5xl mx-auto px-4 md:px-8 py-4 flex justify-between items-center\">\
<a href=\"{home}\" class=\"back-home flex items-center gap-2 text-lg font-semibold\">← {title}</a>\
<div class=\"flex gap-8 items-center\">\
<a href=\"{about}\" class=\"text-sm text-muted-foreground\">About</a>\
<a href=\"{works}\" class=\"text-sm text-muted-foreground\">Works</a>\
</div></div></nav>",
        home = escape(ctx.home_href()),
        title = escape(site_title),
        about = escape(&ctx.home_anchor("about")),
        works = escape(&ctx.home_anchor("works")),
    )
}

/// Page footer; `line` may be empty.
pub fn footer(line: &str) -> String {
    let text = if line.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", escape(line))
    };
    format!(
        "<footer class=\"py-8 px-4 md:px-8 bg-secondary border-t border-border\">\
<div class=\"max-w-5xl mx-auto text-center text-sm text-muted-foreground\">{text}</div></footer>"
    )
}

/// Background band of a content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// White background.
    Plain,
    /// Tinted background.
    Tinted,
}

impl Band {
    /// The other band, for alternating sections.
    pub fn flip(self) -> Self {
        match self {
            Band::Plain => Band::Tinted,
            Band::Tinted => Band::Plain,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Band::Plain => "bg-white",
            Band::Tinted => "bg-secondary",
        }
    }
}

/// A titled content section.
pub fn section(id: Option<&str>, band: Band, heading: &str, inner: &str) -> String {
    let id_attr = id
        .map(|id| format!(" id=\"{}\"", escape(id)))
        .unwrap_or_default();
    format!(
        "<section{id_attr} class=\"py-20 md:py-32 px-4 md:px-8 {}\">\
<div class=\"max-w-5xl mx-auto\"><h2 class=\"text-4xl md:text-5xl font-bold mb-12\">{}</h2>{inner}</div></section>",
        band.class(),
        escape(heading),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_escapes_title() {
        let html = document("A & B", "<main></main>");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<main></main>"));
    }

    #[test]
    fn test_detail_nav_links_home() {
        let ctx = SiteContext::new("/portfolio-site/", "");
        let html = detail_nav(&ctx, "Portfolio");
        assert!(html.contains("href=\"/portfolio-site/\""));
        assert!(html.contains("href=\"/portfolio-site/#works\""));
    }

    #[test]
    fn test_empty_footer_has_no_paragraph() {
        assert!(!footer("").contains("<p>"));
        assert!(footer("© 2024").contains("<p>© 2024</p>"));
    }

    #[test]
    fn test_section_band_alternates() {
        assert_eq!(Band::Plain.flip(), Band::Tinted);
        let html = section(Some("works"), Band::Plain, "Works", "");
        assert!(html.starts_with("<section id=\"works\" class=\"py-20 md:py-32 px-4 md:px-8 bg-white\">"));
    }
}
