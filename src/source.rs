use crate::domain::CatalogItem;
use crate::error::{Result, WayfareError};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::path::Path;
use tracing::info;

/// Read-only catalog boundary. The engine itself never talks to a source;
/// hosts fetch items here and hand slices to `catalog::view`.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All items, in fixture order.
    async fn all_items(&self) -> Result<Vec<CatalogItem>>;

    /// A single item by its stable id.
    async fn item_by_id(&self, id: &str) -> Result<Option<CatalogItem>>;

    /// Distinct category tags, sorted, for filter chips.
    async fn categories(&self) -> Result<Vec<String>>;
}

static BUNDLED_CATALOG: Lazy<Vec<CatalogItem>> = Lazy::new(|| {
    // The bundled fixture ships inside the binary; a parse failure here is
    // a build defect, not a runtime condition.
    serde_json::from_str(include_str!("../fixtures/catalog.json"))
        .unwrap_or_else(|e| panic!("bundled fixture catalog is invalid: {}", e))
});

/// Fixture-backed catalog used by the demo binary and the tests. Items are
/// loaded once and never mutated.
#[derive(Debug)]
pub struct FixtureCatalog {
    items: Vec<CatalogItem>,
}

impl FixtureCatalog {
    /// Catalog compiled into the binary from `fixtures/catalog.json`.
    pub fn bundled() -> Self {
        Self {
            items: BUNDLED_CATALOG.clone(),
        }
    }

    /// Catalog loaded from a JSON fixture file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            WayfareError::Fixture(format!(
                "Failed to read fixture file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let items: Vec<CatalogItem> = serde_json::from_str(&raw)?;
        info!(count = items.len(), path = %path.display(), "loaded fixture catalog");
        Ok(Self { items })
    }

    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn all_items(&self) -> Result<Vec<CatalogItem>> {
        Ok(self.items.clone())
    }

    async fn item_by_id(&self, id: &str) -> Result<Option<CatalogItem>> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }

    async fn categories(&self) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self
            .items
            .iter()
            .map(|item| item.category.to_lowercase())
            .collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }
}
