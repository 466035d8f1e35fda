//! Catalog and stock record types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product record as served by the catalog API.
///
/// Display fields only; availability is tracked by the stock endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Image reference, when the catalog has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Create a product record.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
        }
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Available quantity for a product.
///
/// Fetched fresh from the stock API on every quantity-changing operation;
/// never cached, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stock {
    /// Product this snapshot is for.
    pub id: ProductId,
    /// Currently available quantity.
    pub amount: i64,
}

impl Stock {
    /// Check if a requested amount can be fulfilled.
    pub fn can_fulfill(&self, amount: i64) -> bool {
        self.amount >= amount
    }
}
