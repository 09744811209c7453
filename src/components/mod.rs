//! Screen-specific components for Tipjar.

mod bulk_sheet;
mod device_card;
mod event_log;
mod nav_header;
mod receipt_card;
mod tip_drawer;
mod tip_row;
mod venue_row;
mod venue_sheet;
mod wallet_filters;

pub use bulk_sheet::BulkSheet;
pub use device_card::DeviceCard;
pub use event_log::EventLog;
pub use nav_header::{NavHeader, NavLocation};
pub use receipt_card::ReceiptCard;
pub use tip_drawer::TipDrawer;
pub use tip_row::TipRow;
pub use venue_row::VenueRow;
pub use venue_sheet::VenueSheet;
pub use wallet_filters::WalletFilters;
