//! Project record types.
//!
//! Records are plain `'static` data: they are declared once in the
//! registry table and only ever borrowed afterwards.

use serde::Serialize;

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Route identifier, unique across the registry.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One-line category shown under the title.
    pub subtitle: &'static str,
    /// Lead paragraph of the detail page.
    pub description: &'static str,
    /// The author's role on the project.
    pub role: &'static str,
    /// Short text for the listing card.
    pub summary: &'static str,
    /// Listing card image path, or a placeholder label.
    pub cover: &'static str,
    /// Technology badges, in display order.
    pub tech_stack: &'static [&'static str],
    /// External links shown on the detail page.
    pub links: &'static [Link],
    /// Narrative blocks, in display order.
    pub details: &'static [Detail],
    /// Web screenshots or design galleries.
    pub showcase: Showcase,
}

impl Project {
    /// Which rendering branch this record takes.
    pub fn kind(&self) -> ProjectKind {
        match self.showcase {
            Showcase::Web { .. } => ProjectKind::Web,
            Showcase::Design { .. } => ProjectKind::Design,
        }
    }

    /// Every image path the record references, in display order.
    pub fn image_paths(&self) -> Vec<&'static str> {
        match self.showcase {
            Showcase::Web { screenshots, .. } => screenshots.iter().map(|s| s.image).collect(),
            Showcase::Design { galleries } => galleries
                .iter()
                .flat_map(|g| g.images.iter().copied())
                .collect(),
        }
    }
}

/// Project type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    /// Web application: narrative plus annotated screenshots.
    Web,
    /// Graphic design: narrative plus image galleries.
    Design,
}

impl ProjectKind {
    /// Heading above the narrative blocks.
    pub fn narrative_heading(self) -> &'static str {
        match self {
            ProjectKind::Web => "設計意図と実装内容",
            ProjectKind::Design => "Design Approach",
        }
    }

    /// Lowercase tag used in listings and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectKind::Web => "web",
            ProjectKind::Design => "design",
        }
    }
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (heading, body) narrative block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    /// Block heading.
    pub title: &'static str,
    /// Block body.
    pub content: &'static str,
}

/// An external link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Link text.
    pub label: &'static str,
    /// Absolute URL.
    pub href: &'static str,
}

/// Type-specific showcase content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Showcase {
    /// Screenshots paired positionally with their captions.
    Web {
        /// Line shown under the showcase heading.
        lede: Option<&'static str>,
        /// Annotated screenshots.
        screenshots: &'static [Screenshot],
    },
    /// Named image groups.
    Design {
        /// Galleries in display order.
        galleries: &'static [Gallery],
    },
}

/// One annotated web screenshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    /// Caption heading.
    pub title: &'static str,
    /// Caption body.
    pub description: &'static str,
    /// Image path relative to the asset base.
    pub image: &'static str,
}

/// A named group of design images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gallery {
    /// Section heading.
    pub heading: &'static str,
    /// Alt text stem; grid cells append ` - n`.
    pub alt: &'static str,
    /// Image paths relative to the asset base.
    pub images: &'static [&'static str],
    /// Presentation hint.
    pub hint: LayoutHint,
    /// Render inside a narrow centred column.
    pub narrow: bool,
}

/// Presentation hint attached to a gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutHint {
    /// Key visual.
    Hero,
    /// Artwork collection.
    Artworks,
    /// Printed matter such as cards and postcards.
    Print,
    /// Anything else.
    #[default]
    Default,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SHOTS: &[Screenshot] = &[Screenshot {
        title: "login",
        description: "form",
        image: "images/login.png",
    }];

    const GALLERIES: &[Gallery] = &[
        Gallery {
            heading: "Key Visual",
            alt: "Hero",
            images: &["images/hero.png"],
            hint: LayoutHint::Hero,
            narrow: false,
        },
        Gallery {
            heading: "Cards",
            alt: "Cards",
            images: &["images/a.png", "images/b.png"],
            hint: LayoutHint::Print,
            narrow: false,
        },
    ];

    fn project(showcase: Showcase) -> Project {
        Project {
            id: "sample",
            title: "Sample",
            subtitle: "",
            description: "",
            role: "",
            summary: "",
            cover: "",
            tech_stack: &["Rust"],
            links: &[],
            details: &[],
            showcase,
        }
    }

    #[test]
    fn test_kind_follows_showcase() {
        let web = project(Showcase::Web {
            lede: None,
            screenshots: SHOTS,
        });
        let design = project(Showcase::Design {
            galleries: GALLERIES,
        });
        assert_eq!(web.kind(), ProjectKind::Web);
        assert_eq!(design.kind(), ProjectKind::Design);
    }

    #[test]
    fn test_narrative_heading() {
        assert_eq!(ProjectKind::Web.narrative_heading(), "設計意図と実装内容");
        assert_eq!(ProjectKind::Design.narrative_heading(), "Design Approach");
    }

    #[test]
    fn test_image_paths_flatten_galleries_in_order() {
        let design = project(Showcase::Design {
            galleries: GALLERIES,
        });
        assert_eq!(
            design.image_paths(),
            vec!["images/hero.png", "images/a.png", "images/b.png"]
        );
    }

    #[test]
    fn test_showcase_serializes_with_kind_tag() {
        let web = project(Showcase::Web {
            lede: Some("order"),
            screenshots: SHOTS,
        });
        let json = serde_json::to_value(&web).unwrap();
        assert_eq!(json["showcase"]["kind"], "web");
        assert_eq!(json["showcase"]["screenshots"][0]["image"], "images/login.png");
    }

    #[test]
    fn test_layout_hint_default() {
        assert_eq!(LayoutHint::default(), LayoutHint::Default);
        assert_eq!(serde_json::to_value(LayoutHint::Print).unwrap(), "print");
    }
}
