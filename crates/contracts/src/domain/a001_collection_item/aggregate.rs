use serde::{Deserialize, Serialize};

/// Identifier of an item, unique only within its category
pub type CollectionItemId = u32;

/// Catalog entry (ceramic, jade, bronze or calligraphy piece).
///
/// Every field except `id` is display text. The backend may omit any of them,
/// so missing fields fall back to empty values instead of failing the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub id: CollectionItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dynasty: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub provenance: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub featured: bool,
    /// Bare filename, `uploads/...` path or absolute URL
    #[serde(default)]
    pub image: String,
    /// CSS gradient class pair used as an image placeholder
    #[serde(default)]
    pub image_gradient: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "id": 7,
            "name": "Celadon bowl",
            "featured": true,
            "image": "ceramic_007.jpg",
            "imageGradient": "from-sky-900/50 to-cyan-900/50"
        }"#;
        let item: CollectionItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Celadon bowl");
        assert!(item.featured);
        assert_eq!(item.image_gradient, "from-sky-900/50 to-cyan-900/50");
        assert_eq!(item.dynasty, "");
        assert_eq!(item.price, "");
    }

    #[test]
    fn test_serialize_camel_case() {
        let item = CollectionItem {
            id: 1,
            name: String::new(),
            dynasty: String::new(),
            year: String::new(),
            description: String::new(),
            size: String::new(),
            provenance: String::new(),
            price: String::new(),
            featured: false,
            image: String::new(),
            image_gradient: "a b".to_string(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["imageGradient"], "a b");
        assert!(value.get("image_gradient").is_none());
    }
}
