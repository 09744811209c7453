//! Wallet filter bar: search, status, date range, amount and venue.

use dioxus::prelude::*;
use tipjar_core::{AmountBucket, DateRange, TipStatus, WalletFilter};
use tipjar_ui::{optional_index, pick_optional, with_all, Button, ButtonVariant, Pills, SearchInput};

#[component]
pub fn WalletFilters(
    filter: WalletFilter,
    /// Venue choices for the picker
    venues: Vec<String>,
    on_change: EventHandler<WalletFilter>,
) -> Element {
    let status_options = with_all("All", TipStatus::ALL.iter().map(|s| s.label()));
    let status_index = optional_index(&TipStatus::ALL, filter.status.as_ref());
    let range_index = DateRange::ALL.iter().position(|r| *r == filter.range).unwrap_or(0);
    let bucket_index = AmountBucket::ALL.iter().position(|b| *b == filter.bucket).unwrap_or(0);
    let venue_value = filter.venue.clone().unwrap_or_default();
    let active = filter.is_active();

    let f_query = filter.clone();
    let f_status = filter.clone();
    let f_range = filter.clone();
    let f_bucket = filter.clone();
    let f_venue = filter.clone();

    rsx! {
        div { class: "filter-bar",
            SearchInput {
                value: filter.query.clone(),
                placeholder: "Search pro, venue or receipt".to_string(),
                oninput: move |query: String| on_change.call(WalletFilter { query, ..f_query.clone() }),
            }
            Pills {
                options: status_options,
                selected: status_index,
                aria_label: "Status".to_string(),
                on_select: move |i: usize| {
                    on_change.call(WalletFilter { status: pick_optional(&TipStatus::ALL, i), ..f_status.clone() })
                },
            }
            div { class: "filter-row",
                Pills {
                    options: DateRange::ALL.iter().map(|r| r.label().to_string()).collect::<Vec<_>>(),
                    selected: range_index,
                    aria_label: "Date range".to_string(),
                    on_select: move |i: usize| {
                        if let Some(range) = DateRange::ALL.get(i) {
                            on_change.call(WalletFilter { range: *range, ..f_range.clone() });
                        }
                    },
                }
                Pills {
                    options: AmountBucket::ALL.iter().map(|b| b.label().to_string()).collect::<Vec<_>>(),
                    selected: bucket_index,
                    aria_label: "Amount".to_string(),
                    on_select: move |i: usize| {
                        if let Some(bucket) = AmountBucket::ALL.get(i) {
                            on_change.call(WalletFilter { bucket: *bucket, ..f_bucket.clone() });
                        }
                    },
                }
            }
            div { class: "filter-row",
                select {
                    class: "input-field venue-select",
                    "aria-label": "Venue",
                    value: "{venue_value}",
                    onchange: move |e| {
                        let value = e.value();
                        let venue = if value.is_empty() { None } else { Some(value) };
                        on_change.call(WalletFilter { venue, ..f_venue.clone() });
                    },
                    option { value: "", "All venues" }
                    for venue in venues.iter() {
                        option { key: "{venue}", value: "{venue}", "{venue}" }
                    }
                }
                if active {
                    Button {
                        variant: ButtonVariant::Chip,
                        onclick: move |_| on_change.call(WalletFilter::default()),
                        "Clear filters"
                    }
                }
            }
        }
    }
}
