//! The cart's persistence slot.

use crate::cart::Cart;
use shop_kv::{Store, StoreError};
use tracing::warn;

/// Fixed key the storefront has always kept the serialized cart under.
pub const CART_KEY: &str = "@RocketShoes:cart";

/// Durable slot holding the serialized cart.
///
/// Read once when the store is constructed; written in full on every
/// successful mutation.
pub struct CartSlot {
    store: Store,
}

impl CartSlot {
    /// Create a slot over a key-value store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Read the persisted cart.
    ///
    /// Absent or unparsable contents yield the empty cart; corruption is
    /// logged, never fatal.
    pub fn load(&self) -> Cart {
        match self.store.get::<Cart>(CART_KEY) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!("discarding unreadable cart slot: {err}");
                Cart::new()
            }
        }
    }

    /// Replace the persisted cart, in full.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        self.store.set(CART_KEY, cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn slot(store_name: &str) -> CartSlot {
        CartSlot::new(Store::open(store_name).unwrap())
    }

    #[test]
    fn test_load_absent_slot_is_empty_cart() {
        let slot = slot("slot-absent");
        assert!(slot.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut cart = Cart::new();
        cart.insert_new(Product::new(10u64, "X", 9.99));
        cart.insert_new(Product::new(11u64, "Y", 19.9).with_image("y.jpg"));

        slot("slot-round-trip").save(&cart).unwrap();
        let restored = slot("slot-round-trip").load();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_load_malformed_slot_is_empty_cart() {
        let store = Store::open("slot-malformed").unwrap();
        store.set(CART_KEY, &"definitely not a cart").unwrap();

        let restored = CartSlot::new(Store::open("slot-malformed").unwrap()).load();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_save_replaces_prior_contents() {
        let mut first = Cart::new();
        first.insert_new(Product::new(1u64, "A", 1.0));
        let mut second = Cart::new();
        second.insert_new(Product::new(2u64, "B", 2.0));

        let slot = slot("slot-replace");
        slot.save(&first).unwrap();
        slot.save(&second).unwrap();
        assert_eq!(slot.load(), second);
    }
}
