use serde::{Deserialize, Serialize};

/// Collection categories shown in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ceramics,
    Jades,
    Bronzes,
    Calligraphies,
}

impl Category {
    /// Plural slug, used both as the API resource and the page path
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Ceramics => "ceramics",
            Category::Jades => "jades",
            Category::Bronzes => "bronzes",
            Category::Calligraphies => "calligraphies",
        }
    }

    /// Singular slug from the old link scheme
    pub fn legacy_slug(&self) -> &'static str {
        match self {
            Category::Ceramics => "ceramic",
            Category::Jades => "jade",
            Category::Bronzes => "bronze",
            Category::Calligraphies => "calligraphy",
        }
    }

    /// Human-readable title
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Ceramics => "Ceramics",
            Category::Jades => "Jade",
            Category::Bronzes => "Bronze",
            Category::Calligraphies => "Calligraphy & Painting",
        }
    }

    pub fn all() -> [Category; 4] {
        [
            Category::Ceramics,
            Category::Jades,
            Category::Bronzes,
            Category::Calligraphies,
        ]
    }

    /// Parse a plural slug
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.slug() == slug)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slug() {
        assert_eq!(Category::from_slug("jades"), Some(Category::Jades));
        assert_eq!(Category::from_slug("calligraphies"), Some(Category::Calligraphies));
        assert_eq!(Category::from_slug("jade"), None);
        assert_eq!(Category::from_slug("furniture"), None);
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Category::Bronzes).unwrap();
        assert_eq!(json, "\"bronzes\"");
        for category in Category::all() {
            assert_eq!(category.to_string(), category.slug());
        }
    }
}
