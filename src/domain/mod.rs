use serde::{Deserialize, Serialize};

/// A single listing record in the tourism catalog — either a destination
/// or a marketplace product. Owned by the external catalog source; the
/// engine and presentation layer only read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Stable, unique identifier (fixture slug)
    pub id: String,

    /// Display name shown on listing pages
    pub name: String,

    /// Category tag, e.g. "waterfall", "trek", "handicraft"
    pub category: String,

    /// Human-readable location used in search matching
    pub location: String,

    /// Price in rupees
    pub price: f64,

    /// Visitor rating, 0.0 to 5.0
    pub rating: f64,

    /// Popularity metric (review count)
    pub popularity: u32,

    /// Free-text description used for search matching
    pub description: String,

    /// URL to the listing image, when the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CatalogItem {
    /// True when `needle` appears (case-insensitively) in the name,
    /// description or location of this item.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.location.to_lowercase().contains(&needle)
    }
}
