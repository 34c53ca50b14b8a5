//! The three page views: listing, project detail, and not-found.

use folio_core::{Profile, Project, Registry, Showcase};

use crate::context::SiteContext;
use crate::gallery::{render_gallery, render_screenshots};
use crate::html::{anchor, escape};
use crate::layout::{Band, detail_nav, document, footer, home_nav, section};

/// Heading of the not-found view.
pub const NOT_FOUND_HEADING: &str = "プロジェクトが見つかりません";

/// Label of the not-found view's link back to the listing.
pub const BACK_HOME_LABEL: &str = "ホームに戻る";

/// Heading of a web project's screenshot section.
pub const WEB_SHOWCASE_HEADING: &str = "実装内容と工夫点";

/// Whether a rendered page found what was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// The page exists.
    Found,
    /// The fallback view was rendered.
    NotFound,
}

/// A rendered HTML document and its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Outcome of the lookup behind the page.
    pub status: PageStatus,
    /// Complete HTML document.
    pub html: String,
}

/// Renders pages for one site configuration.
#[derive(Debug, Clone)]
pub struct Renderer {
    ctx: SiteContext,
    registry: Registry,
    profile: Profile,
}

impl Renderer {
    /// Create a renderer over a registry and profile.
    pub fn new(ctx: SiteContext, registry: Registry, profile: Profile) -> Self {
        Self {
            ctx,
            registry,
            profile,
        }
    }

    /// The site context.
    pub fn context(&self) -> &SiteContext {
        &self.ctx
    }

    /// The registry pages are rendered from.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render the listing page.
    pub fn home(&self) -> RenderedPage {
        RenderedPage {
            status: PageStatus::Found,
            html: render_home(&self.ctx, &self.registry, &self.profile),
        }
    }

    /// Render the detail page for `id`, falling back to the not-found view.
    pub fn project(&self, id: &str) -> RenderedPage {
        match self.registry.lookup(id) {
            Ok(project) => RenderedPage {
                status: PageStatus::Found,
                html: render_project(&self.ctx, &self.profile, project),
            },
            Err(err) => {
                log::debug!("rendering fallback: {err}");
                self.not_found()
            }
        }
    }

    /// Render the not-found view.
    pub fn not_found(&self) -> RenderedPage {
        RenderedPage {
            status: PageStatus::NotFound,
            html: render_not_found(&self.ctx, &self.profile),
        }
    }
}

// ============================================================================
// Listing page
// ============================================================================

/// Render the listing page: hero, about, works, and contact.
pub fn render_home(ctx: &SiteContext, registry: &Registry, profile: &Profile) -> String {
    let mut body = home_nav(profile.site_title);
    body.push_str("<main>");
    body.push_str(&hero(profile));
    body.push_str(&about(profile));
    body.push_str(&works(ctx, registry));
    body.push_str(&contact(ctx, profile));
    body.push_str("</main>");
    body.push_str(&footer(profile.copyright));
    document(
        &format!("{} | {}", profile.site_title, profile.owner),
        &body,
    )
}

fn hero(profile: &Profile) -> String {
    format!(
        "<section class=\"hero min-h-screen flex items-center justify-center px-4 md:px-8 py-20\">\
<div class=\"max-w-4xl w-full text-center\">\
<h1 class=\"text-6xl md:text-7xl font-bold mb-4\">{title}</h1>\
<p class=\"owner text-xl md:text-2xl text-muted-foreground font-light\">{owner}</p>\
<p class=\"tagline text-lg text-muted-foreground max-w-2xl mx-auto mb-12\">{tagline}</p>\
<div class=\"flex gap-4 justify-center flex-wrap\">\
<a href=\"#works\" class=\"button button-primary\">作品を見る</a>\
<a href=\"#contact\" class=\"button button-outline\">お問い合わせ</a>\
</div></div></section>",
        title = escape(profile.site_title),
        owner = escape(profile.owner),
        tagline = escape(profile.tagline),
    )
}

fn about(profile: &Profile) -> String {
    let strengths: String = profile.strengths.iter().map(|s| escape(s)).collect();
    let mut skills = String::from("<ul class=\"skills space-y-2 text-muted-foreground\">");
    for skill in profile.skills {
        skills.push_str(&format!(
            "<li class=\"flex items-start gap-3\"><span class=\"text-primary\">•</span>\
<span><strong>{}:</strong> {}</span></li>",
            escape(skill.label),
            escape(skill.detail),
        ));
    }
    skills.push_str("</ul>");
    let inner = format!(
        "<div class=\"grid md:grid-cols-3 gap-12\">\
<div class=\"md:col-span-1\"><div class=\"avatar bg-secondary rounded-lg aspect-square mb-6\"></div></div>\
<div class=\"md:col-span-2 space-y-6\">\
<div><h3 class=\"text-xl font-semibold mb-3\">強み</h3><p class=\"text-muted-foreground leading-relaxed\">{strengths}</p></div>\
<div><h3 class=\"text-xl font-semibold mb-3\">スキル</h3>{skills}</div>\
</div></div>"
    );
    section(Some("about"), Band::Plain, "About", &inner)
}

fn works(ctx: &SiteContext, registry: &Registry) -> String {
    let mut inner = String::from("<div class=\"works grid md:grid-cols-2 gap-12\">");
    for project in registry.projects() {
        inner.push_str(&project_card(ctx, project));
    }
    inner.push_str("</div>");
    section(Some("works"), Band::Plain, "Works", &inner)
}

fn project_card(ctx: &SiteContext, project: &Project) -> String {
    let cover = if project.cover.starts_with("images/") || project.cover.starts_with('/') {
        format!(
            "<img src=\"{}\" alt=\"{}\" class=\"w-full h-full object-cover\">",
            escape(&ctx.asset_url(project.cover)),
            escape(project.title),
        )
    } else {
        format!(
            "<div class=\"cover-placeholder w-full h-full flex items-center justify-center\">\
<span class=\"text-muted-foreground text-sm\">{}</span></div>",
            escape(project.cover)
        )
    };
    let tags: String = project
        .tech_stack
        .iter()
        .map(|tag| format!("<li class=\"tag\">{}</li>", escape(tag)))
        .collect();
    let inner = format!(
        "<div class=\"cover bg-secondary rounded-lg overflow-hidden mb-4 aspect-video\">{cover}</div>\
<h3 class=\"text-xl font-semibold mb-2\">{title}</h3>\
<p class=\"text-muted-foreground text-sm mb-4 leading-relaxed\">{summary}</p>\
<ul class=\"tags flex flex-wrap gap-2 mb-4\">{tags}</ul>\
<span class=\"more text-primary text-sm font-medium\">詳細を見る</span>",
        title = escape(project.title),
        summary = escape(project.summary),
    );
    format!(
        "<div class=\"project-card group\" data-project=\"{}\">{}</div>",
        escape(project.id),
        anchor(&ctx.project_href(project.id), "block", &inner),
    )
}

fn contact(ctx: &SiteContext, profile: &Profile) -> String {
    let mut inner = format!(
        "<p class=\"text-lg text-muted-foreground mb-8\">{}</p>",
        escape(profile.contact_message)
    );
    inner.push_str("<div class=\"contact-links flex gap-4 flex-wrap\">");
    if !ctx.contact_email().is_empty() {
        inner.push_str(&anchor(
            &ctx.mailto(),
            "button button-primary mailto",
            &escape(ctx.contact_email()),
        ));
    }
    for link in profile.links {
        inner.push_str(&anchor(link.href, "button button-outline", &escape(link.label)));
    }
    inner.push_str("</div>");
    section(Some("contact"), Band::Tinted, "Contact", &inner)
}

// ============================================================================
// Detail page
// ============================================================================

/// Render a project's detail page.
pub fn render_project(ctx: &SiteContext, profile: &Profile, project: &Project) -> String {
    let kind = project.kind();
    let mut body = detail_nav(ctx, profile.site_title);
    body.push_str(&format!("<main class=\"project project-{kind}\">"));
    body.push_str(&project_hero(project));

    let details: String = project
        .details
        .iter()
        .map(|d| {
            format!(
                "<div class=\"detail\"><h3 class=\"text-xl font-semibold mb-3\">\
<span class=\"text-primary\">■</span> {}</h3>\
<p class=\"text-lg text-muted-foreground leading-relaxed\">{}</p></div>",
                escape(d.title),
                escape(d.content),
            )
        })
        .collect();
    body.push_str(&section(
        None,
        Band::Tinted,
        kind.narrative_heading(),
        &format!("<div class=\"details space-y-8\">{details}</div>"),
    ));

    match project.showcase {
        Showcase::Web { lede, screenshots } => {
            let lede = lede
                .map(|l| format!("<p class=\"lede text-muted-foreground mb-12 text-lg\">{}</p>", escape(l)))
                .unwrap_or_default();
            body.push_str(&section(
                None,
                Band::Plain,
                WEB_SHOWCASE_HEADING,
                &format!("{lede}{}", render_screenshots(ctx, screenshots)),
            ));
        }
        Showcase::Design { galleries } => {
            let mut band = Band::Plain;
            for gallery in galleries {
                body.push_str(&section(
                    None,
                    band,
                    gallery.heading,
                    &render_gallery(ctx, gallery),
                ));
                band = band.flip();
            }
        }
    }

    body.push_str("</main>");
    body.push_str(&footer(""));
    document(&format!("{} | {}", project.title, profile.site_title), &body)
}

fn project_hero(project: &Project) -> String {
    let badges: String = project
        .tech_stack
        .iter()
        .map(|tech| format!("<li class=\"badge\">{}</li>", escape(tech)))
        .collect();
    let links: String = project
        .links
        .iter()
        .map(|link| anchor(link.href, "project-link text-primary", &escape(link.label)))
        .collect();
    let links = if links.is_empty() {
        links
    } else {
        format!("<div class=\"project-links flex gap-4 mt-8\">{links}</div>")
    };
    format!(
        "<section class=\"project-hero min-h-screen flex items-center justify-center px-4 md:px-8 py-20 pt-32\">\
<div class=\"max-w-4xl w-full\">\
<h1 class=\"text-6xl md:text-7xl font-bold mb-4\">{title}</h1>\
<p class=\"subtitle text-2xl md:text-3xl text-primary font-semibold mb-6\">{subtitle}</p>\
<p class=\"description text-lg text-muted-foreground mb-4\">{description}</p>\
<p class=\"role text-lg text-muted-foreground mb-8\"><span class=\"font-semibold\">役割：</span>{role}</p>\
<ul class=\"tech-stack flex flex-wrap gap-4\">{badges}</ul>{links}\
</div></section>",
        title = escape(project.title),
        subtitle = escape(project.subtitle),
        description = escape(project.description),
        role = escape(project.role),
    )
}

// ============================================================================
// Not-found page
// ============================================================================

/// Render the fallback view with a link back to the listing.
pub fn render_not_found(ctx: &SiteContext, profile: &Profile) -> String {
    let mut body = detail_nav(ctx, profile.site_title);
    body.push_str(&format!(
        "<main class=\"not-found max-w-5xl mx-auto px-4 md:px-8 py-20 pt-32 text-center\">\
<h1 class=\"text-4xl font-bold mb-4\">{NOT_FOUND_HEADING}</h1>\
<a href=\"{}\" class=\"back-home text-primary\">{BACK_HOME_LABEL}</a></main>",
        escape(ctx.home_href()),
    ));
    body.push_str(&footer(""));
    document(&format!("{NOT_FOUND_HEADING} | {}", profile.site_title), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PROFILE;

    fn renderer() -> Renderer {
        Renderer::new(
            SiteContext::new("/", "hello@example.com"),
            Registry::builtin(),
            PROFILE,
        )
    }

    /// Text of every `<li class="badge">` in document order.
    fn badges(html: &str) -> Vec<&str> {
        html.split("<li class=\"badge\">")
            .skip(1)
            .filter_map(|rest| rest.split_once("</li>").map(|(text, _)| text))
            .collect()
    }

    #[test]
    fn test_home_lists_every_project() {
        let page = renderer().home();
        assert_eq!(page.status, PageStatus::Found);
        for project in Registry::builtin().projects() {
            assert!(page.html.contains(&format!("href=\"/project/{}\"", project.id)));
        }
        assert_eq!(page.html.matches("class=\"project-card").count(), 3);
    }

    #[test]
    fn test_home_sections_and_contact() {
        let html = renderer().home().html;
        assert!(html.contains("id=\"about\""));
        assert!(html.contains("id=\"works\""));
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("href=\"mailto:hello@example.com\""));
        assert!(html.contains("佐藤　怜太"));
        assert!(html.contains("<strong>実務経験:</strong>"));
        assert!(html.contains("© 2024 Web Engineer Portfolio. All rights reserved."));
        assert!(html.contains("href=\"https://github.com/ryota-r000\" class=\"button button-outline\" target=\"_blank\""));
    }

    #[test]
    fn test_home_without_email_has_no_mailto() {
        let r = Renderer::new(SiteContext::default(), Registry::builtin(), PROFILE);
        assert!(!r.home().html.contains("mailto:"));
    }

    #[test]
    fn test_ken_interior_shop_detail() {
        let page = renderer().project("ken-interior-shop");
        assert_eq!(page.status, PageStatus::Found);
        assert!(page.html.contains(">KEN Interior Shop</h1>"));
        assert_eq!(
            badges(&page.html),
            ["Java", "Spring Boot", "Thymeleaf", "MySQL", "Git"]
        );
        assert!(page.html.contains("設計意図と実装内容"));
        assert!(page.html.contains(WEB_SHOWCASE_HEADING));
        assert!(page.html.contains("権限制御 → セッション → ロジック の順で掲載"));
        assert_eq!(page.html.matches("<article").count(), 4);
        assert!(page.html.contains("href=\"https://github.com/ryota-r000/kenfurni\""));
    }

    #[test]
    fn test_detail_blocks_keep_order() {
        let html = renderer().project("ken-interior-shop").html;
        let positions: Vec<usize> = ["目的", "セキュリティ", "設計</h3>", "判断", "運用"]
            .iter()
            .filter_map(|t| html.find(t))
            .collect();
        assert_eq!(positions.len(), 5);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_design_detail_galleries() {
        let html = renderer().project("fluid-art-brand").html;
        assert!(html.contains("Design Approach"));
        assert!(!html.contains(WEB_SHOWCASE_HEADING));
        for heading in [
            "Key Visual",
            "Art Collection",
            "Visual Identity",
            "Postcard Design",
            "Business Card Design",
            "Exhibition Visual",
        ] {
            assert!(html.contains(heading), "{heading}");
        }
        assert!(html.contains("grid-cols-2 md:grid-cols-3"));
    }

    #[test]
    fn test_print_design_detail() {
        let html = renderer().project("coffee-shop-visual").html;
        assert!(html.contains("Bean Card Design"));
        assert_eq!(html.matches("alt=\"Bean Cards - ").count(), 6);
        assert!(html.contains("max-w-sm w-full"));
    }

    #[test]
    fn test_unknown_project_renders_fallback() {
        let page = renderer().project("does-not-exist");
        assert_eq!(page.status, PageStatus::NotFound);
        assert!(page.html.contains(NOT_FOUND_HEADING));
        assert!(page.html.contains(&format!("<a href=\"/\" class=\"back-home text-primary\">{BACK_HOME_LABEL}</a>")));
        assert!(badges(&page.html).is_empty());
        assert!(!page.html.contains("設計意図と実装内容"));
        assert!(!page.html.contains("Design Approach"));
    }

    #[test]
    fn test_empty_id_renders_fallback() {
        assert_eq!(renderer().project("").status, PageStatus::NotFound);
    }

    #[test]
    fn test_fallback_links_to_base() {
        let r = Renderer::new(SiteContext::new("/portfolio-site", ""), Registry::builtin(), PROFILE);
        let html = r.not_found().html;
        assert!(html.contains("<a href=\"/portfolio-site/\" class=\"back-home text-primary\">"));
    }

    #[test]
    fn test_home_is_deterministic_across_detail_visits() {
        let r = renderer();
        let first = r.home();
        let _ = r.project("coffee-shop-visual");
        let _ = r.project("does-not-exist");
        assert_eq!(first, r.home());
    }
}
