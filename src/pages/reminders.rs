//! Reminders page - per-venue reminder rules.
//!
//! The page owns a [`VenueBook`] built from seed data on mount. Every
//! user intent goes through [`VenueBook::apply`] and the outcome is shown
//! as a toast.

use dioxus::prelude::*;
use tipjar_core::{
    now_ms, personalization_label, seed, BulkAction, BulkTarget, GlobalPolicy, RuleMode, Toast,
    VenueBook, VenueCategory, VenueCommand, VenueFilter, VenueId, VenueTab,
};
use tipjar_ui::{
    optional_index, pick_optional, with_all, Button, ButtonVariant, EmptyState, Pills, ScoreMeter,
    SearchInput, StatTile, ToastBanner,
};

use crate::components::{BulkSheet, VenueRow, VenueSheet};
use crate::context::{use_config, use_screen_toast};

/// One-line description of the account-wide policy.
pub fn global_summary(global: &GlobalPolicy) -> String {
    let reminders = if global.reminders_enabled {
        "Reminders on"
    } else {
        "Reminders off"
    };
    let quiet = global
        .quiet_hours
        .map(|q| format!("quiet {}", q.label()))
        .unwrap_or_else(|| "no quiet hours".to_string());
    format!("{} \u{00B7} up to {}/wk \u{00B7} {}", reminders, global.weekly_cap, quiet)
}

#[component]
pub fn Reminders() -> Element {
    let config = use_config();
    let global = config.global_policy();

    let mut book = use_signal(|| VenueBook::new(seed::venues(now_ms())));
    let mut filter = use_signal(VenueFilter::default);
    let mut editing: Signal<Option<VenueId>> = use_signal(|| None);
    let mut bulk_open = use_signal(|| false);
    let mut toast = use_screen_toast();

    let mut dispatch = move |command: VenueCommand| match book.write().apply(command) {
        Ok(t) => toast.show(t),
        Err(e) => toast.show(Toast::from(&e)),
    };

    let on_save = move |commands: Vec<VenueCommand>| {
        let result = book.write().apply_all(commands);
        match result {
            Ok(mut toasts) => {
                editing.set(None);
                match toasts.len() {
                    0 => {}
                    1 => toast.show(toasts.remove(0)),
                    _ => toast.show(Toast::success("Changes saved")),
                }
            }
            Err(e) => toast.show(Toast::from(&e)),
        }
    };

    let now = now_ms();
    let current = filter();
    let view = book.read().view(&current, now);
    let personalization_text = personalization_label(&view.personalization).to_string();
    let tab_index = VenueTab::ALL.iter().position(|t| *t == current.tab).unwrap_or(0);
    let tab_counts: Vec<usize> = VenueTab::ALL
        .iter()
        .map(|t| book.read().venues().iter().filter(|v| t.matches(v, now)).count())
        .collect();
    let category_value = current
        .category
        .map(|c| c.label().to_string())
        .unwrap_or_default();
    let editing_venue = editing().and_then(|id| book.read().get(&id).cloned());
    let all_venues = book.read().venues().to_vec();

    rsx! {
        div { class: "page reminders",
            header { class: "page-head",
                h1 { class: "page-title", "Tip reminders" }
                p { class: "page-subtitle", "{global_summary(&global)}" }
            }

            ScoreMeter {
                score: view.personalization,
                title: "Personalization".to_string(),
                label: personalization_text,
                caption: "How much you've tailored reminders".to_string(),
            }

            div { class: "stat-row",
                StatTile { label: "Venues".to_string(), value: view.total.to_string() }
                StatTile { label: "Favorites".to_string(), value: view.favorites.to_string() }
                StatTile { label: "Customized".to_string(), value: view.customized.to_string() }
            }

            div { class: "toolbar",
                SearchInput {
                    value: current.query.clone(),
                    placeholder: "Search venues".to_string(),
                    oninput: move |query: String| filter.write().query = query,
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| bulk_open.set(true),
                    "Bulk apply"
                }
            }

            Pills {
                options: VenueTab::ALL.iter().map(|t| t.label().to_string()).collect::<Vec<_>>(),
                selected: tab_index,
                counts: tab_counts,
                aria_label: "Venue tabs".to_string(),
                on_select: move |i: usize| {
                    if let Some(tab) = VenueTab::ALL.get(i) {
                        filter.write().tab = *tab;
                    }
                },
            }

            div { class: "filter-row",
                Pills {
                    options: with_all("Any rule", RuleMode::ALL.iter().map(|m| m.label())),
                    selected: optional_index(&RuleMode::ALL, current.rule.as_ref()),
                    aria_label: "Rule".to_string(),
                    on_select: move |i: usize| filter.write().rule = pick_optional(&RuleMode::ALL, i),
                }
                select {
                    class: "input-field category-select",
                    "aria-label": "Category",
                    value: "{category_value}",
                    onchange: move |e| {
                        let value = e.value();
                        filter.write().category =
                            VenueCategory::ALL.iter().copied().find(|c| c.label() == value);
                    },
                    option { value: "", "All categories" }
                    for category in VenueCategory::ALL {
                        option { key: "{category.label()}", value: "{category.label()}", "{category.label()}" }
                    }
                }
            }

            if view.venues.is_empty() {
                EmptyState {
                    title: "No venues match".to_string(),
                    hint: "Try a different search or tab".to_string(),
                }
            }

            div { class: "venue-list",
                for venue in view.venues.iter() {
                    VenueRow {
                        key: "{venue.id}",
                        venue: venue.clone(),
                        now,
                        on_favorite: move |id: VenueId| dispatch(VenueCommand::ToggleFavorite(id)),
                        on_rule: move |(id, mode): (VenueId, RuleMode)| dispatch(VenueCommand::SetRule { id, mode }),
                        on_edit: move |id: VenueId| editing.set(Some(id)),
                    }
                }
            }

            if let Some(venue) = editing_venue {
                VenueSheet {
                    key: "{venue.id}",
                    venue: venue.clone(),
                    global,
                    on_save,
                    on_reset: move |id: VenueId| {
                        dispatch(VenueCommand::Reset(id));
                        editing.set(None);
                    },
                    on_close: move |_| editing.set(None),
                }
            }

            if bulk_open() {
                BulkSheet {
                    venues: all_venues,
                    on_apply: move |(target, action): (BulkTarget, BulkAction)| {
                        dispatch(VenueCommand::ApplyBulk { target, action });
                        bulk_open.set(false);
                    },
                    on_close: move |_| bulk_open.set(false),
                }
            }

            ToastBanner { toast: toast.current(), on_close: move |_| toast.close() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_summary_lists_policy() {
        let text = global_summary(&GlobalPolicy::default());
        assert!(text.starts_with("Reminders on"));
        assert!(text.contains("3/wk"));
        assert!(text.contains("22:00\u{2013}07:00"));
    }

    #[test]
    fn global_summary_without_quiet_hours() {
        let global = GlobalPolicy {
            reminders_enabled: false,
            weekly_cap: 1,
            quiet_hours: None,
        };
        assert_eq!(global_summary(&global), "Reminders off \u{00B7} up to 1/wk \u{00B7} no quiet hours");
    }
}
