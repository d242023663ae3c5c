use crate::domain::CatalogItem as DomainItem;
use async_graphql::{Object, ID};

/// GraphQL representation of a catalog item
#[derive(Clone)]
pub struct Item {
    pub inner: DomainItem,
}

impl From<DomainItem> for Item {
    fn from(item: DomainItem) -> Self {
        Self { inner: item }
    }
}

#[Object]
impl Item {
    /// The stable identifier for the item
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Display name shown on listing pages
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Category tag (lowercased fixture value)
    async fn category(&self) -> &str {
        &self.inner.category
    }

    /// Human-readable location
    async fn location(&self) -> &str {
        &self.inner.location
    }

    /// Price in rupees
    async fn price(&self) -> f64 {
        self.inner.price
    }

    /// Visitor rating, 0 to 5
    async fn rating(&self) -> f64 {
        self.inner.rating
    }

    /// Review count used as the popularity metric
    async fn popularity(&self) -> u32 {
        self.inner.popularity
    }

    /// Free-text description
    async fn description(&self) -> &str {
        &self.inner.description
    }

    /// URL to the listing image
    async fn image_url(&self) -> Option<&str> {
        self.inner.image_url.as_deref()
    }
}
