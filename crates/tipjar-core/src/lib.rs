//! Tipjar Core Library
//!
//! State, filters and scoring behind the four Tipjar screens.
//!
//! ## Overview
//!
//! Each screen owns an explicit store built from seed data when the screen
//! is created:
//!
//! - [`VenueBook`] - per-venue reminder rules, bulk apply, personalization
//! - [`SecurityCenter`] - device sessions, security settings, audit trail
//! - [`Receipt`] - a shareable receipt with a privacy-gated message
//! - [`Wallet`] - tip history with search, filters and aggregates
//!
//! Stores expose one method per user intent (or a `Command` enum through
//! `apply`) and derive their on-screen views with pure functions, so all of
//! it is testable without a renderer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tipjar_core::{seed, now_ms, VenueBook, VenueFilter, VenueId, BulkAction, BulkTarget};
//!
//! let now = now_ms();
//! let mut book = VenueBook::new(seed::venues(now));
//!
//! book.toggle_favorite(&VenueId::new("v-noodle"))?;
//! book.apply_bulk(BulkTarget::Favorites, BulkAction::Deny);
//!
//! for venue in book.view(&VenueFilter::default(), now).venues {
//!     println!("{}: {}", venue.name, venue.summary());
//! }
//! ```

pub mod capability;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod network;
pub mod receipt;
pub mod score;
pub mod security;
pub mod seed;
pub mod toast;
pub mod venues;
pub mod wallet;

// Re-exports
pub use capability::{
    copy_with_fallback, share_with_fallback, Capability, Clipboard, NoClipboard, NoShareSheet,
    ShareOutcome, SharePayload, ShareSheet,
};
pub use config::AppConfig;
pub use error::{TipError, TipResult};
pub use filter::{matches_query, AmountBucket, DateRange};
pub use format::{calendar_date, date_time, mask, money, now_ms, relative_time, DAY_MS};
pub use network::MockNetwork;
pub use receipt::{
    resolve_visibility, HiddenReason, MessageVisibility, PaymentMethod, Privacy, Receipt, Verification,
};
pub use score::{Score, ScoreBand};
pub use security::{
    security_label, security_score, Device, DeviceId, DeviceKind, SecurityCenter, SecurityCommand,
    SecurityEvent, SecuritySetting, SecuritySettings, SecurityView, Severity,
};
pub use toast::{Toast, ToastCenter, ToastTicket, ToastTone};
pub use venues::{
    effective_policy, personalization, personalization_label, venue_view, BulkAction, BulkTarget,
    EffectivePolicy, GlobalPolicy, QuietHours, QuietHoursOverride, RuleMode, Venue, VenueBook,
    VenueCategory, VenueCommand, VenueFilter, VenueId, VenueTab, VenueView,
};
pub use wallet::{wallet_view, TipAction, TipId, TipItem, TipStatus, Wallet, WalletFilter, WalletView};
