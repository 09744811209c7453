//! Page components for Tipjar, one per screen.

mod receipt;
mod reminders;
mod security;
mod wallet;

pub use receipt::ReceiptPage;
pub use reminders::Reminders;
pub use security::Security;
pub use wallet::Wallet;
