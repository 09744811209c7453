//! Filter predicates shared by the list screens.
//!
//! Every predicate is optional: the `All` variant (or an empty query)
//! matches everything, and predicates compose by logical AND in the
//! screen-specific view builders.

use serde::{Deserialize, Serialize};

use crate::format::DAY_MS;

/// Case-insensitive substring match over a fixed set of fields.
///
/// Leading/trailing whitespace in the query is ignored; an empty query
/// matches every record.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Date-range preset for history lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "7D")]
    Last7,
    #[serde(rename = "30D")]
    Last30,
    #[serde(rename = "90D")]
    Last90,
    #[default]
    #[serde(rename = "ALL")]
    All,
}

impl DateRange {
    /// All presets in display order.
    pub const ALL: [DateRange; 4] = [
        DateRange::Last7,
        DateRange::Last30,
        DateRange::Last90,
        DateRange::All,
    ];

    /// Window length in days, `None` for `All`.
    pub fn days(&self) -> Option<i64> {
        match self {
            DateRange::Last7 => Some(7),
            DateRange::Last30 => Some(30),
            DateRange::Last90 => Some(90),
            DateRange::All => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Last7 => "7D",
            DateRange::Last30 => "30D",
            DateRange::Last90 => "90D",
            DateRange::All => "ALL",
        }
    }

    /// Whether a record at `at` (ms) falls inside the window ending `now`.
    pub fn includes(&self, now: i64, at: i64) -> bool {
        match self.days() {
            Some(days) => now - at <= days * DAY_MS,
            None => true,
        }
    }
}

/// Amount bucket for tip lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AmountBucket {
    #[default]
    All,
    /// Strictly less than $5
    Under5,
    /// $5 through $20 inclusive
    From5To20,
    /// Strictly more than $20
    Over20,
}

impl AmountBucket {
    pub const ALL: [AmountBucket; 4] = [
        AmountBucket::All,
        AmountBucket::Under5,
        AmountBucket::From5To20,
        AmountBucket::Over20,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AmountBucket::All => "Any amount",
            AmountBucket::Under5 => "<$5",
            AmountBucket::From5To20 => "$5\u{2013}$20",
            AmountBucket::Over20 => ">$20",
        }
    }

    pub fn matches(&self, amount: f64) -> bool {
        match self {
            AmountBucket::All => true,
            AmountBucket::Under5 => amount < 5.0,
            AmountBucket::From5To20 => (5.0..=20.0).contains(&amount),
            AmountBucket::Over20 => amount > 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_all() {
        assert!(matches_query("", &["Blue Bottle"]));
        assert!(matches_query("   ", &[]));
    }

    #[test]
    fn query_is_case_insensitive() {
        assert!(matches_query("BLUE", &["Blue Bottle", "Cafe"]));
        assert!(matches_query("cafe", &["Blue Bottle", "Cafe"]));
        assert!(!matches_query("salon", &["Blue Bottle", "Cafe"]));
    }

    #[test]
    fn date_range_boundaries() {
        let now = 1_000 * DAY_MS;
        assert!(DateRange::Last7.includes(now, now - 7 * DAY_MS));
        assert!(!DateRange::Last7.includes(now, now - 7 * DAY_MS - 1));
        assert!(DateRange::Last30.includes(now, now - 29 * DAY_MS));
        assert!(DateRange::All.includes(now, 0));
    }

    #[test]
    fn amount_bucket_edges() {
        assert!(AmountBucket::Under5.matches(4.99));
        assert!(!AmountBucket::Under5.matches(5.0));
        assert!(AmountBucket::From5To20.matches(5.0));
        assert!(AmountBucket::From5To20.matches(20.0));
        assert!(!AmountBucket::Over20.matches(20.0));
        assert!(AmountBucket::Over20.matches(20.01));
        assert!(AmountBucket::All.matches(0.0));
    }

    #[test]
    fn date_range_serde_names() {
        let json = serde_json::to_string(&DateRange::Last30).unwrap();
        assert_eq!(json, "\"30D\"");
    }
}
