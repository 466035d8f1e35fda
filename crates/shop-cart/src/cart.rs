//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A line item: a catalog product plus the requested amount.
///
/// The product fields are flattened so the serialized form is the flat
/// object the storefront has always persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The catalog record this line item was created from.
    #[serde(flatten)]
    pub product: Product,
    /// Requested quantity. Never stored below 1.
    pub amount: i64,
}

impl CartItem {
    /// First line item for a product entering the cart.
    pub fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    /// Id of the underlying product.
    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

/// Ordered list of line items.
///
/// At most one line item per product id; order is insertion order
/// (append-on-add) and survives serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Check if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all line items.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Check if a product has a line item.
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|i| i.id() == id)
    }

    /// Get a product's line item.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Get a product's current amount.
    pub fn amount_of(&self, id: ProductId) -> Option<i64> {
        self.get(id).map(|i| i.amount)
    }

    /// Append a product with amount 1.
    ///
    /// Returns `false` and leaves the cart unchanged if the product already
    /// has a line item; a cart never holds two items for the same id.
    pub fn insert_new(&mut self, product: Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.items.push(CartItem::new(product));
        true
    }

    /// Set a product's amount, leaving other line items untouched.
    ///
    /// Returns `false` if the product has no line item; nothing is created.
    pub fn set_amount(&mut self, id: ProductId, amount: i64) -> bool {
        match self.items.iter_mut().find(|i| i.id() == id) {
            Some(item) => {
                item.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Remove a product's line item.
    ///
    /// Returns `false` if no line item matched.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id() != id);
        self.items.len() < len_before
    }
}

impl IntoIterator for Cart {
    type Item = CartItem;
    type IntoIter = std::vec::IntoIter<CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
