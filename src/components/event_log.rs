//! Security Event Log Component
//!
//! Newest-first audit trail with a severity filter. Entries are never
//! edited or removed.

use dioxus::prelude::*;
use tipjar_core::{date_time, relative_time, SecurityEvent, Severity};
use tipjar_ui::{optional_index, pick_optional, with_all, EmptyState, Pills};

const LEVELS: [Severity; 2] = [Severity::Info, Severity::Warn];

fn level_label(level: Severity) -> &'static str {
    match level {
        Severity::Info => "Info",
        Severity::Warn => "Warnings",
    }
}

#[component]
pub fn EventLog(
    events: Vec<SecurityEvent>,
    now: i64,
    level: Option<Severity>,
    on_level: EventHandler<Option<Severity>>,
) -> Element {
    let options = with_all("All", LEVELS.iter().map(|l| level_label(*l)));
    let selected = optional_index(&LEVELS, level.as_ref());

    rsx! {
        section { class: "event-log",
            div { class: "section-head",
                h2 { class: "section-title", "Activity" }
                Pills {
                    options,
                    selected,
                    aria_label: "Event severity".to_string(),
                    on_select: move |i: usize| on_level.call(pick_optional(&LEVELS, i)),
                }
            }
            if events.is_empty() {
                EmptyState { title: "No activity for this filter".to_string() }
            }
            ol { class: "event-list",
                for event in events.iter() {
                    li {
                        key: "{event.id}",
                        class: "event-item {event.level.class()}",
                        title: "{date_time(event.at)}",
                        div { class: "event-head",
                            span { class: "event-title", "{event.title}" }
                            span { class: "event-time", "{relative_time(now, event.at)}" }
                        }
                        p { class: "event-detail", "{event.detail}" }
                    }
                }
            }
        }
    }
}
