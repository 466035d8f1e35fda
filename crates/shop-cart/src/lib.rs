//! Client-side cart state for the storefront.
//!
//! This crate provides the cart component of the storefront:
//!
//! - **Catalog**: product and stock record types
//! - **Cart**: line items with per-product uniqueness and stable order
//! - **Store**: the four cart operations, validated against live stock and
//!   written through to the persistence slot on every successful mutation
//! - **Notices**: the user-facing failure signals operations surface
//!   instead of returning errors
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shop_cart::prelude::*;
//! use shop_kv::Store;
//!
//! let store = CartStore::new(
//!     Arc::new(HttpCatalog::new("http://localhost:3333")),
//!     Arc::new(HttpStock::new("http://localhost:3333")),
//!     CartSlot::new(Store::open_default()?),
//!     Arc::new(LogNotifier),
//! );
//!
//! store.add_product(ProductId::new(10)).await;
//! for item in store.cart().items() {
//!     println!("{} x{}", item.product.name, item.amount);
//! }
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod notice;
pub mod slot;
pub mod store;

pub use cart::{Cart, CartItem};
pub use catalog::{Product, Stock};
pub use error::CartError;
pub use ids::ProductId;
pub use notice::{CartNotice, LogNotifier, Notify};
pub use slot::{CartSlot, CART_KEY};
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::{CatalogApi, HttpCatalog, HttpStock, StockApi};
    pub use crate::cart::{Cart, CartItem};
    pub use crate::catalog::{Product, Stock};
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::notice::{CartNotice, LogNotifier, Notify};
    pub use crate::slot::{CartSlot, CART_KEY};
    pub use crate::store::CartStore;
}
