//! User-facing failure notices.

use std::fmt;

/// A one-shot user-facing failure signal.
///
/// The storefront surfaces these as toasts; any equivalent notification
/// channel can implement [`Notify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartNotice {
    /// Adding a product failed.
    AddFailed,
    /// Removing a product failed.
    RemoveFailed,
    /// Requested amount exceeds available stock.
    OutOfStock,
    /// Changing a product's amount failed.
    QuantityChangeFailed,
}

impl CartNotice {
    /// The storefront's user-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            CartNotice::AddFailed => "Erro na adição do produto",
            CartNotice::RemoveFailed => "Erro na remoção do produto",
            CartNotice::OutOfStock => "Quantidade solicitada fora de estoque",
            CartNotice::QuantityChangeFailed => "Erro na alteração de quantidade do produto",
        }
    }
}

impl fmt::Display for CartNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Channel for surfacing notices to the user.
pub trait Notify: Send + Sync {
    /// Deliver a notice. Implementations must not block.
    fn notify(&self, notice: CartNotice);
}

/// Notifier that logs notices.
///
/// Stands in wherever no UI toast channel is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn notify(&self, notice: CartNotice) {
        tracing::error!("{}", notice.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_storefront_strings() {
        assert_eq!(CartNotice::AddFailed.message(), "Erro na adição do produto");
        assert_eq!(
            CartNotice::RemoveFailed.message(),
            "Erro na remoção do produto"
        );
        assert_eq!(
            CartNotice::OutOfStock.message(),
            "Quantidade solicitada fora de estoque"
        );
        assert_eq!(
            CartNotice::QuantityChangeFailed.message(),
            "Erro na alteração de quantidade do produto"
        );
    }

    #[test]
    fn test_display_uses_message() {
        assert_eq!(
            CartNotice::OutOfStock.to_string(),
            "Quantidade solicitada fora de estoque"
        );
    }
}
