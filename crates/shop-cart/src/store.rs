//! The cart state container.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::api::{CatalogApi, StockApi};
use crate::cart::Cart;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::notice::{CartNotice, Notify};
use crate::slot::CartSlot;

/// A failed mutation: the typed cause plus the notice it surfaces as.
struct OpFailure {
    error: CartError,
    notice: CartNotice,
}

impl OpFailure {
    fn new(error: CartError, notice: CartNotice) -> Self {
        Self { error, notice }
    }
}

/// Client-side cart state.
///
/// Holds the list of line items, validates mutations against the catalog
/// and stock APIs, and writes every successful mutation through to the
/// persistence slot before publishing it to subscribers. Failures never
/// propagate to callers: the prior cart value is left untouched and a
/// [`CartNotice`] goes out through the notifier.
///
/// Mutations are serialized: each one holds the write gate for its full
/// duration, including the suspension across the network fetch, and reads
/// the latest published value only after acquiring it. Readers never block.
pub struct CartStore {
    catalog: Arc<dyn CatalogApi>,
    stock: Arc<dyn StockApi>,
    slot: CartSlot,
    notifier: Arc<dyn Notify>,
    state: watch::Sender<Cart>,
    write_gate: Mutex<()>,
}

impl CartStore {
    /// Build a store, restoring the persisted cart from the slot.
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        stock: Arc<dyn StockApi>,
        slot: CartSlot,
        notifier: Arc<dyn Notify>,
    ) -> Self {
        let (state, _) = watch::channel(slot.load());
        Self {
            catalog,
            stock,
            slot,
            notifier,
            state,
            write_gate: Mutex::new(()),
        }
    }

    /// Snapshot of the current cart.
    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Subscribe to cart changes.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// Add one unit of a product to the cart.
    ///
    /// A product not yet in the cart enters with amount 1. An existing line
    /// item is re-validated against current stock and incremented; failures
    /// on that path surface as the quantity-change notices.
    pub async fn add_product(&self, product_id: ProductId) {
        if let Err(failure) = self.try_add_product(product_id).await {
            self.report(failure);
        }
    }

    /// Remove a product's line item from the cart.
    ///
    /// Removing a product that has no line item is an error, not a no-op.
    pub async fn remove_product(&self, product_id: ProductId) {
        if let Err(failure) = self.try_remove_product(product_id).await {
            self.report(failure);
        }
    }

    /// Set a product's amount to exactly `amount`.
    ///
    /// Amounts of zero or less are ignored without a notice. A product not
    /// in the cart is never created by this operation.
    pub async fn set_quantity(&self, product_id: ProductId, amount: i64) {
        if let Err(failure) = self.try_set_quantity(product_id, amount).await {
            self.report(failure);
        }
    }

    async fn try_add_product(&self, product_id: ProductId) -> Result<(), OpFailure> {
        let _gate = self.write_gate.lock().await;

        let product = self.catalog.product(product_id).await.map_err(|source| {
            OpFailure::new(
                CartError::Catalog { product_id, source },
                CartNotice::AddFailed,
            )
        })?;

        match self.cart().amount_of(product_id) {
            None => {
                let mut cart = self.cart();
                cart.insert_new(product);
                self.commit(cart)
                    .map_err(|error| OpFailure::new(error, CartNotice::AddFailed))
            }
            // Existing line item: the amount path owns validation, and its
            // failures keep their own notices.
            Some(amount) => self.apply_amount(product_id, amount + 1).await,
        }
    }

    async fn try_remove_product(&self, product_id: ProductId) -> Result<(), OpFailure> {
        let _gate = self.write_gate.lock().await;

        let mut cart = self.cart();
        if !cart.remove(product_id) {
            return Err(OpFailure::new(
                CartError::NotInCart(product_id),
                CartNotice::RemoveFailed,
            ));
        }
        self.commit(cart)
            .map_err(|error| OpFailure::new(error, CartNotice::RemoveFailed))
    }

    async fn try_set_quantity(&self, product_id: ProductId, amount: i64) -> Result<(), OpFailure> {
        // Guard against invalid decrements; not an error.
        if amount <= 0 {
            return Ok(());
        }
        let _gate = self.write_gate.lock().await;
        self.apply_amount(product_id, amount).await
    }

    /// Stock-validated amount update. Caller holds the write gate.
    async fn apply_amount(&self, product_id: ProductId, amount: i64) -> Result<(), OpFailure> {
        let stock = self.stock.stock(product_id).await.map_err(|source| {
            OpFailure::new(
                CartError::Stock { product_id, source },
                CartNotice::QuantityChangeFailed,
            )
        })?;

        if !stock.can_fulfill(amount) {
            return Err(OpFailure::new(
                CartError::OutOfStock {
                    product_id,
                    requested: amount,
                    available: stock.amount,
                },
                CartNotice::OutOfStock,
            ));
        }

        let mut cart = self.cart();
        // An id with no line item updates nothing, but the cart is still
        // committed, unchanged.
        cart.set_amount(product_id, amount);
        self.commit(cart)
            .map_err(|error| OpFailure::new(error, CartNotice::QuantityChangeFailed))
    }

    /// Persist, then publish. Ordering keeps failed writes invisible.
    fn commit(&self, cart: Cart) -> Result<(), CartError> {
        self.slot.save(&cart)?;
        debug!(items = cart.len(), "cart committed");
        self.state.send_replace(cart);
        Ok(())
    }

    fn report(&self, failure: OpFailure) {
        warn!("cart operation failed: {}", failure.error);
        self.notifier.notify(failure.notice);
    }
}
