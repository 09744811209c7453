//! Bulk apply sheet: one rule for a whole group of venues.

use dioxus::prelude::*;
use tipjar_core::{BulkAction, BulkTarget, Venue};
use tipjar_ui::{Button, ButtonVariant, Pills, Sheet};

/// Venues per bulk target, in [`BulkTarget::ALL`] order.
pub fn target_counts(venues: &[Venue]) -> Vec<usize> {
    BulkTarget::ALL
        .iter()
        .map(|t| venues.iter().filter(|v| t.matches(v)).count())
        .collect()
}

#[component]
pub fn BulkSheet(
    venues: Vec<Venue>,
    on_apply: EventHandler<(BulkTarget, BulkAction)>,
    on_close: EventHandler<()>,
) -> Element {
    let mut target = use_signal(BulkTarget::default);
    let mut action = use_signal(BulkAction::default);

    let counts = target_counts(&venues);
    let target_index = BulkTarget::ALL.iter().position(|t| *t == target()).unwrap_or(0);
    let action_index = BulkAction::ALL.iter().position(|a| *a == action()).unwrap_or(0);
    let affected = counts.get(target_index).copied().unwrap_or(0);
    let preview = match affected {
        0 => "No venues match this group".to_string(),
        1 => format!("{} will apply to 1 venue", action().label()),
        n => format!("{} will apply to {} venues", action().label(), n),
    };

    rsx! {
        Sheet {
            open: true,
            title: "Bulk apply".to_string(),
            subtitle: "Set one rule for a group of venues".to_string(),
            on_close: move |_| on_close.call(()),
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    variant: if action() == BulkAction::Deny { ButtonVariant::Danger } else { ButtonVariant::Primary },
                    disabled: affected == 0,
                    onclick: move |_| on_apply.call((target(), action())),
                    "Apply"
                }
            },

            section { class: "sheet-section",
                h3 { class: "section-label", "Venues" }
                Pills {
                    options: BulkTarget::ALL.iter().map(|t| t.label().to_string()).collect::<Vec<_>>(),
                    selected: target_index,
                    counts: counts.clone(),
                    aria_label: "Bulk target".to_string(),
                    on_select: move |i: usize| {
                        if let Some(t) = BulkTarget::ALL.get(i) {
                            target.set(*t);
                        }
                    },
                }
            }
            section { class: "sheet-section",
                h3 { class: "section-label", "Rule" }
                Pills {
                    options: BulkAction::ALL.iter().map(|a| a.label().to_string()).collect::<Vec<_>>(),
                    selected: action_index,
                    aria_label: "Bulk action".to_string(),
                    on_select: move |i: usize| {
                        if let Some(a) = BulkAction::ALL.get(i) {
                            action.set(*a);
                        }
                    },
                }
            }
            p { class: "policy-preview", "{preview}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipjar_core::{seed, DAY_MS};

    #[test]
    fn counts_follow_target_order() {
        let venues = seed::venues(200 * DAY_MS);
        let counts = target_counts(&venues);
        assert_eq!(counts.len(), BulkTarget::ALL.len());
        assert_eq!(counts[0], venues.len());
        assert_eq!(counts[1], venues.iter().filter(|v| v.favorite).count());
    }
}
