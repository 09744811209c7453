//! Tip history for the wallet screen.
//!
//! Items are generated once and never mutated; the screen only derives
//! views from them. Sync state (last refresh, error banner) lives beside
//! the items in [`Wallet`].

use serde::{Deserialize, Serialize};

use crate::filter::{matches_query, AmountBucket, DateRange};
use crate::receipt::PaymentMethod;
use crate::toast::Toast;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TipId(pub String);

impl std::fmt::Display for TipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipStatus {
    Completed,
    Pending,
    Refunded,
    Failed,
}

impl TipStatus {
    pub const ALL: [TipStatus; 4] = [
        TipStatus::Completed,
        TipStatus::Pending,
        TipStatus::Refunded,
        TipStatus::Failed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TipStatus::Completed => "Completed",
            TipStatus::Pending => "Pending",
            TipStatus::Refunded => "Refunded",
            TipStatus::Failed => "Failed",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TipStatus::Completed => "status-completed",
            TipStatus::Pending => "status-pending",
            TipStatus::Refunded => "status-refunded",
            TipStatus::Failed => "status-failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipItem {
    pub id: TipId,
    pub pro_name: String,
    pub venue: String,
    pub receipt_number: String,
    pub amount: f64,
    pub fee: f64,
    pub status: TipStatus,
    pub note: String,
    pub method: PaymentMethod,
    /// Unix ms
    pub at: i64,
}

/// Current selections on the wallet screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletFilter {
    pub query: String,
    pub status: Option<TipStatus>,
    pub range: DateRange,
    pub bucket: AmountBucket,
    pub venue: Option<String>,
}

impl WalletFilter {
    pub fn matches(&self, item: &TipItem, now: i64) -> bool {
        matches_query(&self.query, &[&item.pro_name, &item.venue, &item.receipt_number])
            && self.status.map_or(true, |s| item.status == s)
            && self.range.includes(now, item.at)
            && self.bucket.matches(item.amount)
            && self.venue.as_ref().map_or(true, |v| &item.venue == v)
    }

    /// Whether any predicate beyond the defaults is active.
    pub fn is_active(&self) -> bool {
        self != &WalletFilter::default()
    }
}

/// Derived view for the wallet screen
#[derive(Debug, Clone, PartialEq)]
pub struct WalletView {
    /// Newest first
    pub items: Vec<TipItem>,
    pub count: usize,
    pub completed_total: f64,
    pub pending_total: f64,
    pub refunded_total: f64,
    pub average_tip: Option<f64>,
    /// Distinct venues across the whole history, for the venue picker
    pub venues: Vec<String>,
}

/// Filter, sort and aggregate the tip history.
pub fn wallet_view(items: &[TipItem], filter: &WalletFilter, now: i64) -> WalletView {
    let mut matched: Vec<TipItem> = items
        .iter()
        .filter(|item| filter.matches(item, now))
        .cloned()
        .collect();
    matched.sort_by_key(|item| std::cmp::Reverse(item.at));

    let sum = |status: TipStatus| -> f64 {
        matched
            .iter()
            .filter(|i| i.status == status)
            .map(|i| i.amount)
            .sum()
    };
    let completed_total = sum(TipStatus::Completed);
    let pending_total = sum(TipStatus::Pending);
    let refunded_total = sum(TipStatus::Refunded);
    let completed = matched.iter().filter(|i| i.status == TipStatus::Completed).count();
    let average_tip = (completed > 0).then(|| completed_total / completed as f64);

    let mut venues: Vec<String> = items.iter().map(|i| i.venue.clone()).collect();
    venues.sort();
    venues.dedup();

    WalletView {
        count: matched.len(),
        items: matched,
        completed_total,
        pending_total,
        refunded_total,
        average_tip,
        venues,
    }
}

/// Stubbed per-tip actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipAction {
    RequestRefund,
    Report,
    ShareReceipt,
}

impl TipAction {
    pub const ALL: [TipAction; 3] = [TipAction::RequestRefund, TipAction::Report, TipAction::ShareReceipt];

    pub fn label(&self) -> &'static str {
        match self {
            TipAction::RequestRefund => "Request refund",
            TipAction::Report => "Report a problem",
            TipAction::ShareReceipt => "Share receipt",
        }
    }

    pub fn is_available(&self, item: &TipItem) -> bool {
        match self {
            TipAction::RequestRefund => item.status == TipStatus::Completed,
            TipAction::Report => true,
            TipAction::ShareReceipt => !item.receipt_number.is_empty(),
        }
    }

    /// Feedback once the mock call has resolved.
    pub fn outcome(&self, item: &TipItem) -> Toast {
        match self {
            TipAction::RequestRefund => {
                Toast::success(format!("Refund requested for {}", item.receipt_number))
            }
            TipAction::Report => Toast::info(format!("Thanks, we'll look into {}", item.receipt_number)),
            TipAction::ShareReceipt => Toast::success("Receipt link ready to share"),
        }
    }
}

/// Tip history plus sync state for one wallet screen instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wallet {
    items: Vec<TipItem>,
    last_synced: Option<i64>,
    refresh_error: Option<String>,
}

impl Wallet {
    pub fn new(items: Vec<TipItem>) -> Self {
        Self {
            items,
            last_synced: None,
            refresh_error: None,
        }
    }

    pub fn items(&self) -> &[TipItem] {
        &self.items
    }

    pub fn get(&self, id: &TipId) -> Option<&TipItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn view(&self, filter: &WalletFilter, now: i64) -> WalletView {
        wallet_view(&self.items, filter, now)
    }

    pub fn last_synced(&self) -> Option<i64> {
        self.last_synced
    }

    pub fn refresh_error(&self) -> Option<&str> {
        self.refresh_error.as_deref()
    }

    pub fn mark_synced(&mut self, now: i64) {
        self.last_synced = Some(now);
        self.refresh_error = None;
    }

    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.refresh_error = Some(message.into());
    }

    /// Hide the error banner without refreshing.
    pub fn dismiss_error(&mut self) {
        self.refresh_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DAY_MS;

    const NOW: i64 = 500 * DAY_MS;

    fn tip(id: &str, venue: &str, amount: f64, status: TipStatus, days_ago: i64) -> TipItem {
        TipItem {
            id: TipId(id.to_string()),
            pro_name: format!("Pro {}", id),
            venue: venue.to_string(),
            receipt_number: format!("RCV-TEST-{}", id),
            amount,
            fee: 0.3,
            status,
            note: String::new(),
            method: PaymentMethod::new("Visa", "4242"),
            at: NOW - days_ago * DAY_MS,
        }
    }

    fn items() -> Vec<TipItem> {
        vec![
            tip("1", "Corner Cafe", 3.0, TipStatus::Completed, 2),
            tip("2", "Corner Cafe", 12.0, TipStatus::Pending, 1),
            tip("3", "Skyline Bar", 25.0, TipStatus::Completed, 40),
            tip("4", "Skyline Bar", 8.0, TipStatus::Refunded, 100),
        ]
    }

    #[test]
    fn newest_first_and_totals() {
        let view = wallet_view(&items(), &WalletFilter::default(), NOW);
        let ids: Vec<String> = view.items.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "1", "3", "4"]);
        assert_eq!(view.count, 4);
        assert!((view.completed_total - 28.0).abs() < 1e-9);
        assert!((view.pending_total - 12.0).abs() < 1e-9);
        assert!((view.refunded_total - 8.0).abs() < 1e-9);
        assert_eq!(view.average_tip, Some(14.0));
        assert_eq!(view.venues, vec!["Corner Cafe", "Skyline Bar"]);
    }

    #[test]
    fn filters_compose_by_and() {
        let filter = WalletFilter {
            range: DateRange::Last30,
            bucket: AmountBucket::From5To20,
            ..Default::default()
        };
        let view = wallet_view(&items(), &filter, NOW);
        assert_eq!(view.count, 1);
        assert_eq!(view.items[0].id.0, "2");
        assert!(filter.is_active());
    }

    #[test]
    fn query_matches_receipt_number() {
        let filter = WalletFilter {
            query: "rcv-test-3".to_string(),
            ..Default::default()
        };
        assert_eq!(wallet_view(&items(), &filter, NOW).count, 1);
    }

    #[test]
    fn venue_and_status_filters() {
        let filter = WalletFilter {
            venue: Some("Skyline Bar".to_string()),
            status: Some(TipStatus::Completed),
            ..Default::default()
        };
        let view = wallet_view(&items(), &filter, NOW);
        assert_eq!(view.count, 1);
        assert_eq!(view.items[0].id.0, "3");
    }

    #[test]
    fn empty_result_is_valid() {
        let filter = WalletFilter {
            status: Some(TipStatus::Failed),
            ..Default::default()
        };
        let view = wallet_view(&items(), &filter, NOW);
        assert_eq!(view.count, 0);
        assert_eq!(view.average_tip, None);
        assert_eq!(view.venues.len(), 2);
    }

    #[test]
    fn refund_only_for_completed() {
        let items = items();
        assert!(TipAction::RequestRefund.is_available(&items[0]));
        assert!(!TipAction::RequestRefund.is_available(&items[1]));
        assert!(TipAction::Report.is_available(&items[3]));
    }

    #[test]
    fn sync_state() {
        let mut wallet = Wallet::new(items());
        wallet.mark_failed("offline");
        assert_eq!(wallet.refresh_error(), Some("offline"));
        wallet.mark_synced(NOW);
        assert_eq!(wallet.refresh_error(), None);
        assert_eq!(wallet.last_synced(), Some(NOW));
    }

    #[test]
    fn dismissing_keeps_last_sync() {
        let mut wallet = Wallet::new(items());
        wallet.mark_synced(NOW);
        wallet.mark_failed("offline");
        wallet.dismiss_error();
        assert_eq!(wallet.refresh_error(), None);
        assert_eq!(wallet.last_synced(), Some(NOW));
    }
}
