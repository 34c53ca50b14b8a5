//! Route identifier utilities.
//!
//! Project identifiers appear verbatim in URLs (`/project/{id}`), so the
//! registry only accepts lowercase kebab-case keys.

/// Normalize a display string to a lowercase kebab-case identifier.
///
/// Trims, lowercases, treats underscores as spaces, and joins the
/// remaining words with single hyphens.
///
/// # Examples
///
/// ```
/// use folio_core::ids::normalize_id;
///
/// assert_eq!(normalize_id("KEN Interior Shop"), "ken-interior-shop");
/// assert_eq!(normalize_id("coffee_shop visual"), "coffee-shop-visual");
/// assert_eq!(normalize_id("  Fluid   Art  "), "fluid-art");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Whether `id` is a usable route identifier.
///
/// Accepts non-empty lowercase ASCII letters, digits, and single interior
/// hyphens.
///
/// ```
/// use folio_core::ids::is_route_id;
///
/// assert!(is_route_id("ken-interior-shop"));
/// assert!(!is_route_id("Ken"));
/// assert!(!is_route_id("a--b"));
/// assert!(!is_route_id(""));
/// ```
pub fn is_route_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // normalize_id tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_id_with_spaces() {
        assert_eq!(normalize_id("Fluid Art Brand"), "fluid-art-brand");
    }

    #[test]
    fn test_normalize_id_with_underscores() {
        assert_eq!(normalize_id("coffee_shop_visual"), "coffee-shop-visual");
    }

    #[test]
    fn test_normalize_id_already_normalized() {
        assert_eq!(normalize_id("ken-interior-shop"), "ken-interior-shop");
    }

    #[test]
    fn test_normalize_id_empty() {
        assert_eq!(normalize_id(""), "");
        assert_eq!(normalize_id("   "), "");
    }

    // -------------------------------------------------------------------------
    // is_route_id tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_is_route_id_accepts_kebab_case() {
        assert!(is_route_id("fluid-art-brand"));
        assert!(is_route_id("web2"));
    }

    #[test]
    fn test_is_route_id_rejects_edges() {
        assert!(!is_route_id("-leading"));
        assert!(!is_route_id("trailing-"));
        assert!(!is_route_id("has space"));
        assert!(!is_route_id("under_score"));
        assert!(!is_route_id("日本語"));
    }

    #[test]
    fn test_normalized_ids_are_route_ids() {
        for raw in ["KEN Interior Shop", "Coffee Shop Visual", "fluid_art brand"] {
            assert!(is_route_id(&normalize_id(raw)), "{raw}");
        }
    }
}
