//! Gallery and screenshot rendering.

use folio_core::{Gallery, GalleryLayout, Screenshot, select_layout};

use crate::context::SiteContext;
use crate::html::escape;

/// Render a gallery's images according to [`select_layout`].
pub fn render_gallery(ctx: &SiteContext, gallery: &Gallery) -> String {
    let layout = select_layout(gallery.images, gallery.hint);
    let inner = render_images(ctx, gallery.images, gallery.alt, layout);
    if gallery.narrow && !inner.is_empty() {
        format!(
            "<div class=\"flex justify-center\"><div class=\"max-w-sm w-full\">{inner}</div></div>"
        )
    } else {
        inner
    }
}

/// Render `images` with a precomputed layout.
pub fn render_images(ctx: &SiteContext, images: &[&str], alt: &str, layout: GalleryLayout) -> String {
    match layout {
        GalleryLayout::Empty => String::new(),
        GalleryLayout::Single { framed } => {
            let Some(path) = images.first() else {
                return String::new();
            };
            let (wrapper, img) = if framed {
                ("bg-gray-50 rounded-lg p-8", "max-w-md max-h-96")
            } else {
                ("", "w-full max-w-3xl h-auto")
            };
            format!(
                "<div class=\"gallery gallery-single w-full flex justify-center {wrapper}\" data-layout=\"single\">\
<img src=\"{}\" alt=\"{}\" class=\"rounded-lg shadow-md border border-border object-contain {img}\"></div>",
                escape(&ctx.asset_url(path)),
                escape(alt),
            )
        }
        GalleryLayout::Grid { columns, framed, .. } => {
            let (cell, img) = if framed {
                ("bg-gray-50 p-4 min-h-80", "w-full h-full max-h-72")
            } else {
                ("bg-white", "w-full h-auto")
            };
            let mut html = format!(
                "<div class=\"gallery gallery-grid grid gap-6 grid-cols-{} md:grid-cols-{}\" data-layout=\"grid\">",
                columns.base, columns.md
            );
            for (index, path) in images.iter().enumerate() {
                html.push_str(&format!(
                    "<div class=\"gallery-cell flex items-center justify-center rounded-lg border border-border overflow-hidden {cell}\">\
<img src=\"{}\" alt=\"{} - {}\" class=\"object-contain {img}\"></div>",
                    escape(&ctx.asset_url(path)),
                    escape(alt),
                    index + 1,
                ));
            }
            html.push_str("</div>");
            html
        }
    }
}

/// Render a web project's screenshots, each caption beside its image.
pub fn render_screenshots(ctx: &SiteContext, screenshots: &[Screenshot]) -> String {
    let mut html = String::from("<div class=\"screenshots space-y-16\">");
    for shot in screenshots {
        html.push_str(&format!(
            "<article class=\"screenshot bg-secondary rounded-lg overflow-hidden border border-border\">\
<div class=\"grid md:grid-cols-2 gap-8 p-8\">\
<div class=\"flex flex-col justify-center\"><h3 class=\"text-2xl font-semibold mb-4\">{title}</h3>\
<p class=\"text-lg text-muted-foreground leading-relaxed\">{description}</p></div>\
<div class=\"flex items-center justify-center\"><img src=\"{src}\" alt=\"{title}\" \
class=\"w-full h-auto rounded-lg shadow-md border border-border object-cover\"></div>\
</div></article>",
            title = escape(shot.title),
            description = escape(shot.description),
            src = escape(&ctx.asset_url(shot.image)),
        ));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::LayoutHint;

    fn gallery(images: &'static [&'static str], hint: LayoutHint, narrow: bool) -> Gallery {
        Gallery {
            heading: "Cards",
            alt: "Cards",
            images,
            hint,
            narrow,
        }
    }

    #[test]
    fn test_single_image_full_width() {
        let html = render_gallery(
            &SiteContext::default(),
            &gallery(&["images/logo.jpg"], LayoutHint::Default, false),
        );
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains("data-layout=\"single\""));
        assert!(html.contains("w-full max-w-3xl"));
        assert!(html.contains("alt=\"Cards\""));
    }

    #[test]
    fn test_single_print_is_framed() {
        let html = render_gallery(
            &SiteContext::default(),
            &gallery(&["images/card.png"], LayoutHint::Print, false),
        );
        assert!(html.contains("bg-gray-50 rounded-lg p-8"));
        assert!(html.contains("max-w-md max-h-96"));
    }

    #[test]
    fn test_grid_has_one_cell_per_image() {
        let html = render_gallery(
            &SiteContext::default(),
            &gallery(&["a.jpg", "b.jpg", "c.jpg"], LayoutHint::Artworks, false),
        );
        assert!(html.contains("data-layout=\"grid\""));
        assert!(html.contains("grid-cols-2 md:grid-cols-3"));
        assert_eq!(html.matches("gallery-cell").count(), 3);
        assert!(html.contains("alt=\"Cards - 3\""));
    }

    #[test]
    fn test_print_grid_columns() {
        let html = render_gallery(
            &SiteContext::default(),
            &gallery(&["a.png", "b.png"], LayoutHint::Print, false),
        );
        assert!(html.contains("grid-cols-1 md:grid-cols-2"));
        assert_eq!(html.matches("bg-gray-50 p-4").count(), 2);
    }

    #[test]
    fn test_narrow_wraps_in_column() {
        let html = render_gallery(
            &SiteContext::default(),
            &gallery(&["images/shop.png"], LayoutHint::Print, true),
        );
        assert!(html.starts_with("<div class=\"flex justify-center\"><div class=\"max-w-sm w-full\">"));
    }

    #[test]
    fn test_empty_gallery_renders_nothing() {
        let html = render_gallery(&SiteContext::default(), &gallery(&[], LayoutHint::Print, true));
        assert!(html.is_empty());
    }

    #[test]
    fn test_images_resolve_under_base() {
        let ctx = SiteContext::new("/portfolio-site/", "");
        let html = render_gallery(&ctx, &gallery(&["images/a.png"], LayoutHint::Hero, false));
        assert!(html.contains("src=\"/portfolio-site/images/a.png\""));
    }

    #[test]
    fn test_screenshots_pair_caption_and_image() {
        const SHOTS: &[Screenshot] = &[
            Screenshot {
                title: "one",
                description: "first",
                image: "images/1.png",
            },
            Screenshot {
                title: "two",
                description: "second",
                image: "images/2.png",
            },
        ];
        let html = render_screenshots(&SiteContext::default(), SHOTS);
        assert_eq!(html.matches("<article").count(), 2);
        let first = html.find("images/1.png").unwrap_or(usize::MAX);
        let second = html.find("images/2.png").unwrap_or(0);
        assert!(first < second);
    }
}
