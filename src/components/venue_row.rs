//! Venue row for the reminders list.
//!
//! Name, category, last visit and a rule summary chip, with a favorite
//! star and quick rule chips.

use dioxus::prelude::*;
use tipjar_core::{relative_time, RuleMode, Venue, VenueId};
use tipjar_ui::{Button, ButtonVariant, IconButton};

/// Short chip label for the quick rule picker
pub fn rule_short_label(mode: RuleMode) -> &'static str {
    match mode {
        RuleMode::FollowGlobal => "Global",
        RuleMode::AlwaysAllow => "Allow",
        RuleMode::AlwaysDeny => "Deny",
    }
}

#[component]
pub fn VenueRow(
    venue: Venue,
    now: i64,
    on_favorite: EventHandler<VenueId>,
    on_rule: EventHandler<(VenueId, RuleMode)>,
    on_edit: EventHandler<VenueId>,
) -> Element {
    let visited = relative_time(now, venue.last_visit);
    let summary = venue.summary();
    let tone = venue.chip_tone();
    let star = if venue.favorite { "\u{2605}" } else { "\u{2606}" };
    let star_label = if venue.favorite {
        format!("Remove {} from favorites", venue.name)
    } else {
        format!("Add {} to favorites", venue.name)
    };
    let fav_id = venue.id.clone();
    let edit_id = venue.id.clone();

    rsx! {
        article { class: "venue-row",
            IconButton {
                onclick: move |_| on_favorite.call(fav_id.clone()),
                aria_label: star_label,
                pressed: venue.favorite,
                class: if venue.favorite { "favorite-star on".to_string() } else { "favorite-star".to_string() },
                "{star}"
            }
            div { class: "venue-main",
                div { class: "venue-head",
                    span { class: "venue-name", "{venue.name}" }
                    span { class: "venue-category", "{venue.category.label()}" }
                }
                span { class: "venue-meta", "{venue.address} \u{00B7} {visited} \u{00B7} {venue.visits} visits" }
                span { class: "rule-chip chip-{tone}", "{summary}" }
                if !venue.note.trim().is_empty() {
                    span { class: "venue-note", "\u{201C}{venue.note}\u{201D}" }
                }
            }
            div { class: "venue-actions",
                div { class: "rule-picker", role: "group", "aria-label": "Reminder rule",
                    for mode in RuleMode::ALL {
                        {
                            let id = venue.id.clone();
                            let selected = venue.rule == mode;
                            rsx! {
                                button {
                                    key: "{rule_short_label(mode)}",
                                    class: if selected { "rule-option selected" } else { "rule-option" },
                                    "aria-pressed": if selected { "true" } else { "false" },
                                    onclick: move |_| {
                                        if !selected {
                                            on_rule.call((id.clone(), mode));
                                        }
                                    },
                                    "{rule_short_label(mode)}"
                                }
                            }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    "Edit"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels() {
        assert_eq!(rule_short_label(RuleMode::FollowGlobal), "Global");
        assert_eq!(rule_short_label(RuleMode::AlwaysDeny), "Deny");
    }
}
