//! Site-wide rendering context: base path and contact details.

use serde::{Deserialize, Serialize};

/// Settings every page needs to build URLs and the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContext {
    base_path: String,
    contact_email: String,
}

impl SiteContext {
    /// Build a context, normalising `base_path` to `/.../`.
    pub fn new(base_path: &str, contact_email: impl Into<String>) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
            contact_email: contact_email.into(),
        }
    }

    /// Base path, always starting and ending with `/`.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Contact e-mail address.
    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    /// URL of the listing page.
    pub fn home_href(&self) -> &str {
        &self.base_path
    }

    /// URL of a section anchor on the listing page.
    pub fn home_anchor(&self, anchor: &str) -> String {
        format!("{}#{anchor}", self.base_path)
    }

    /// URL of a project detail page.
    pub fn project_href(&self, id: &str) -> String {
        format!("{}project/{id}", self.base_path)
    }

    /// URL of a static asset. A leading `/` on `path` is dropped so that
    /// every asset resolves under the base path.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path.trim_start_matches('/'))
    }

    /// `mailto:` URL for the contact address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new("/", "")
    }
}

/// Normalise a mount path so it starts and ends with a single `/`.
///
/// ```
/// use folio_render::context::normalize_base_path;
///
/// assert_eq!(normalize_base_path(""), "/");
/// assert_eq!(normalize_base_path("portfolio-site"), "/portfolio-site/");
/// assert_eq!(normalize_base_path("/portfolio-site/"), "/portfolio-site/");
/// assert_eq!(normalize_base_path("//a//b//"), "/a/b/");
/// ```
pub fn normalize_base_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_urls() {
        let ctx = SiteContext::new("/", "hello@example.com");
        assert_eq!(ctx.home_href(), "/");
        assert_eq!(ctx.home_anchor("works"), "/#works");
        assert_eq!(ctx.project_href("ken-interior-shop"), "/project/ken-interior-shop");
        assert_eq!(ctx.mailto(), "mailto:hello@example.com");
    }

    #[test]
    fn test_nested_base_urls() {
        let ctx = SiteContext::new("/portfolio-site", "");
        assert_eq!(ctx.base_path(), "/portfolio-site/");
        assert_eq!(
            ctx.project_href("fluid-art-brand"),
            "/portfolio-site/project/fluid-art-brand"
        );
        assert_eq!(
            ctx.asset_url("images/a.png"),
            "/portfolio-site/images/a.png"
        );
    }

    #[test]
    fn test_asset_url_strips_leading_slash() {
        let ctx = SiteContext::default();
        assert_eq!(ctx.asset_url("/images/a.png"), "/images/a.png");
        assert_eq!(ctx.asset_url("images/a.png"), "/images/a.png");
    }
}
