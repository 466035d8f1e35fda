//! Cart error types.

use crate::ids::ProductId;
use shop_data::FetchError;
use shop_kv::StoreError;
use thiserror::Error;

/// Errors that can occur while mutating the cart.
///
/// These never escape the public operations; [`crate::store::CartStore`]
/// converts each one into a user-facing notice and leaves the cart as it
/// was.
#[derive(Error, Debug)]
pub enum CartError {
    /// Catalog lookup failed (transport, not-found, or malformed body).
    #[error("catalog fetch failed for product {product_id}: {source}")]
    Catalog {
        product_id: ProductId,
        source: FetchError,
    },

    /// Stock lookup failed (transport, not-found, or malformed body).
    #[error("stock fetch failed for product {product_id}: {source}")]
    Stock {
        product_id: ProductId,
        source: FetchError,
    },

    /// Product has no line item in the cart.
    #[error("product not in cart: {0}")]
    NotInCart(ProductId),

    /// Requested amount exceeds available stock.
    #[error(
        "insufficient stock for product {product_id}: requested {requested}, available {available}"
    )]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Persistence slot write failed.
    #[error("cart slot write failed: {0}")]
    Slot(#[from] StoreError),
}
