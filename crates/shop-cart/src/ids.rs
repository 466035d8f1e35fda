//! Type-safe identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog product.
///
/// The storefront APIs serve numeric ids; the newtype keeps them from being
/// mixed up with quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from its numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(10);
        assert_eq!(id.value(), 10);
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new(1), ProductId::from(1));
        assert_ne!(ProductId::new(1), ProductId::new(2));
    }

    #[test]
    fn test_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&ProductId::new(10)).unwrap();
        assert_eq!(json, "10");
        let id: ProductId = serde_json::from_str("10").unwrap();
        assert_eq!(id, ProductId::new(10));
    }
}
