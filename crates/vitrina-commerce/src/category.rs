//! Display-category to distributor-category mapping.

/// Display categories with a known distributor category id.
///
/// The distributor models only these; anything else is folded into the
/// free-text search term by the feed client. That fallback is lossy but
/// lets general terms ("Software") still narrow results.
const UPSTREAM_CATEGORIES: &[(&str, &str)] = &[
    ("Videovigilancia", "22"),
    ("Redes", "26"),
    ("Control de Acceso", "37"),
    ("Energía", "30"),
    ("Automatización e Intrusión", "32"),
    ("Detección de Fuego", "38"),
    ("Cableado Estructurado", "65811"),
];

/// Look up the distributor's category id for a display category.
pub fn upstream_category_id(category: &str) -> Option<&'static str> {
    UPSTREAM_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, id)| *id)
}

/// The category loaded when a query carries neither search nor category,
/// so the landing page is never empty.
pub fn default_category() -> &'static str {
    "Videovigilancia"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(upstream_category_id("Videovigilancia"), Some("22"));
        assert_eq!(upstream_category_id("Cableado Estructurado"), Some("65811"));
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(upstream_category_id("Software"), None);
        // Lookup is exact, not case-folded.
        assert_eq!(upstream_category_id("videovigilancia"), None);
    }

    #[test]
    fn test_default_category_is_mapped() {
        assert!(upstream_category_id(default_category()).is_some());
    }
}
