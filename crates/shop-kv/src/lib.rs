//! Type-safe key-value persistence for the storefront.
//!
//! Provides a simple, ergonomic API for durable key-value data with
//! automatic JSON serialization. On `wasm32` targets values live in Spin's
//! Key-Value Store; native builds share an in-process map per store name.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_kv::Store;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<CartItem>,
//! }
//!
//! let store = Store::open_default()?;
//!
//! store.set("@RocketShoes:cart", &cart)?;
//! let cart: Option<Cart> = store.get("@RocketShoes:cart")?;
//! store.delete("@RocketShoes:cart")?;
//! ```

mod error;
mod store;

pub use error::StoreError;
pub use store::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Store, StoreError};
}
