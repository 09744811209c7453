//! Edit sheet for one venue's reminder rule.
//!
//! Edits are held in a [`VenueDraft`] until saved; saving validates the
//! draft and hands the resulting commands to the page.

use dioxus::prelude::*;
use tipjar_core::venues::MAX_WEEKLY_CAP;
use tipjar_core::{
    effective_policy, GlobalPolicy, QuietHours, QuietHoursOverride, RuleMode, TipResult, Venue,
    VenueCommand, VenueId,
};
use tipjar_ui::{Button, ButtonVariant, Input, Pills, Sheet, TextArea};

const NOTE_MAX: usize = 140;
const CAP_CHOICES: std::ops::RangeInclusive<u32> = 1..=MAX_WEEKLY_CAP;

/// Quiet-hours choice in the sheet, before times are parsed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuietChoice {
    Global,
    Off,
    Custom,
}

impl QuietChoice {
    pub const ALL: [QuietChoice; 3] = [QuietChoice::Global, QuietChoice::Off, QuietChoice::Custom];

    pub fn label(&self) -> &'static str {
        match self {
            QuietChoice::Global => "Follow global",
            QuietChoice::Off => "None",
            QuietChoice::Custom => "Custom",
        }
    }
}

/// Unsaved edits for one venue
#[derive(Clone, PartialEq, Debug)]
pub struct VenueDraft {
    pub rule: RuleMode,
    pub cap: Option<u32>,
    pub quiet: QuietChoice,
    pub quiet_start: String,
    pub quiet_end: String,
    pub note: String,
}

impl VenueDraft {
    pub fn from_venue(venue: &Venue) -> Self {
        let (quiet, quiet_start, quiet_end) = match venue.quiet_hours {
            QuietHoursOverride::FollowGlobal => (QuietChoice::Global, String::new(), String::new()),
            QuietHoursOverride::Off => (QuietChoice::Off, String::new(), String::new()),
            QuietHoursOverride::Custom(q) => (
                QuietChoice::Custom,
                q.start.format("%H:%M").to_string(),
                q.end.format("%H:%M").to_string(),
            ),
        };
        Self {
            rule: venue.rule,
            cap: venue.cap,
            quiet,
            quiet_start,
            quiet_end,
            note: venue.note.clone(),
        }
    }

    pub fn quiet_hours(&self) -> TipResult<QuietHoursOverride> {
        Ok(match self.quiet {
            QuietChoice::Global => QuietHoursOverride::FollowGlobal,
            QuietChoice::Off => QuietHoursOverride::Off,
            QuietChoice::Custom => {
                QuietHoursOverride::Custom(QuietHours::parse(&self.quiet_start, &self.quiet_end)?)
            }
        })
    }

    /// Commands that turn `venue` into this draft. Nothing is returned on error.
    pub fn commands(&self, venue: &Venue) -> TipResult<Vec<VenueCommand>> {
        let quiet_hours = self.quiet_hours()?;
        let id = venue.id.clone();
        let mut commands = Vec::new();
        if self.rule != venue.rule {
            commands.push(VenueCommand::SetRule { id: id.clone(), mode: self.rule });
        }
        if self.cap != venue.cap {
            commands.push(VenueCommand::SetCap { id: id.clone(), cap: self.cap });
        }
        if quiet_hours != venue.quiet_hours {
            commands.push(VenueCommand::SetQuietHours { id: id.clone(), quiet_hours });
        }
        if self.note.trim() != venue.note {
            commands.push(VenueCommand::SetNote { id, note: self.note.clone() });
        }
        Ok(commands)
    }
}

#[component]
pub fn VenueSheet(
    venue: Venue,
    global: GlobalPolicy,
    on_save: EventHandler<Vec<VenueCommand>>,
    on_reset: EventHandler<VenueId>,
    on_close: EventHandler<()>,
) -> Element {
    let initial = VenueDraft::from_venue(&venue);
    let mut draft = use_signal(move || initial);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let current = draft();
    let rule_index = RuleMode::ALL.iter().position(|m| *m == current.rule).unwrap_or(0);
    let quiet_index = QuietChoice::ALL.iter().position(|q| *q == current.quiet).unwrap_or(0);
    let cap_value = current.cap.map(|c| c.to_string()).unwrap_or_default();

    let preview = {
        let mut preview_venue = venue.clone();
        preview_venue.rule = current.rule;
        preview_venue.cap = current.cap;
        if let Ok(q) = current.quiet_hours() {
            preview_venue.quiet_hours = q;
        }
        effective_policy(&preview_venue, &global)
    };
    let preview_text = format!(
        "{} \u{00B7} up to {}/wk \u{00B7} {}",
        if preview.reminds { "Reminders on" } else { "Reminders off" },
        preview.weekly_cap,
        preview
            .quiet_hours
            .map(|q| format!("quiet {}", q.label()))
            .unwrap_or_else(|| "no quiet hours".to_string()),
    );

    let save_venue = venue.clone();
    let reset_id = venue.id.clone();

    rsx! {
        Sheet {
            open: true,
            title: venue.name.clone(),
            subtitle: format!("{} \u{00B7} {}", venue.category.label(), venue.address),
            on_close: move |_| on_close.call(()),
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_reset.call(reset_id.clone()),
                    "Reset to global"
                }
                Button {
                    onclick: move |_| match draft.read().commands(&save_venue) {
                        Ok(commands) => {
                            error.set(None);
                            on_save.call(commands);
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    },
                    "Save"
                }
            },

            section { class: "sheet-section",
                h3 { class: "section-label", "Reminders" }
                Pills {
                    options: RuleMode::ALL.iter().map(|m| m.label().to_string()).collect::<Vec<_>>(),
                    selected: rule_index,
                    aria_label: "Reminder rule".to_string(),
                    on_select: move |i: usize| {
                        if let Some(mode) = RuleMode::ALL.get(i) {
                            draft.write().rule = *mode;
                        }
                    },
                }
            }

            section { class: "sheet-section",
                h3 { class: "section-label", "Weekly cap" }
                select {
                    class: "input-field",
                    value: "{cap_value}",
                    onchange: move |e| draft.write().cap = e.value().parse::<u32>().ok(),
                    option { value: "", "Follow global ({global.weekly_cap}/wk)" }
                    for cap in CAP_CHOICES {
                        option { key: "{cap}", value: "{cap}", "{cap} per week" }
                    }
                }
            }

            section { class: "sheet-section",
                h3 { class: "section-label", "Quiet hours" }
                Pills {
                    options: QuietChoice::ALL.iter().map(|q| q.label().to_string()).collect::<Vec<_>>(),
                    selected: quiet_index,
                    aria_label: "Quiet hours".to_string(),
                    on_select: move |i: usize| {
                        if let Some(choice) = QuietChoice::ALL.get(i) {
                            draft.write().quiet = *choice;
                            error.set(None);
                        }
                    },
                }
                if current.quiet == QuietChoice::Custom {
                    div { class: "time-range",
                        Input {
                            id: "quiet-start".to_string(),
                            label: "From".to_string(),
                            input_type: "time".to_string(),
                            value: current.quiet_start.clone(),
                            oninput: move |s: String| draft.write().quiet_start = s,
                        }
                        Input {
                            id: "quiet-end".to_string(),
                            label: "Until".to_string(),
                            input_type: "time".to_string(),
                            value: current.quiet_end.clone(),
                            oninput: move |s: String| draft.write().quiet_end = s,
                        }
                    }
                }
                if let Some(message) = error() {
                    p { class: "input-error", role: "alert", "{message}" }
                }
            }

            section { class: "sheet-section",
                TextArea {
                    id: "venue-note".to_string(),
                    label: "Note".to_string(),
                    placeholder: "e.g. Tip Maya, not the front desk".to_string(),
                    value: current.note.clone(),
                    max_len: NOTE_MAX,
                    oninput: move |s: String| draft.write().note = s,
                }
            }

            p { class: "policy-preview", "{preview_text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipjar_core::{VenueCategory, DAY_MS};

    fn venue() -> Venue {
        Venue::new("v-1", "Corner Grind", VenueCategory::Cafe, "1 Main St", 10 * DAY_MS)
    }

    #[test]
    fn unchanged_draft_has_no_commands() {
        let v = venue();
        let draft = VenueDraft::from_venue(&v);
        assert!(draft.commands(&v).unwrap().is_empty());
    }

    #[test]
    fn custom_quiet_hours_need_both_times() {
        let v = venue();
        let mut draft = VenueDraft::from_venue(&v);
        draft.quiet = QuietChoice::Custom;
        draft.quiet_start = "21:00".to_string();
        assert!(draft.commands(&v).is_err());

        draft.quiet_end = "06:30".to_string();
        let commands = draft.commands(&v).unwrap();
        assert_eq!(commands.len(), 1);
        assert!(matches!(
            commands[0],
            VenueCommand::SetQuietHours { quiet_hours: QuietHoursOverride::Custom(_), .. }
        ));
    }

    #[test]
    fn draft_collects_each_change() {
        let v = venue();
        let mut draft = VenueDraft::from_venue(&v);
        draft.rule = RuleMode::AlwaysDeny;
        draft.cap = Some(2);
        draft.note = "  cash only  ".to_string();
        let commands = draft.commands(&v).unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            VenueCommand::SetRule { id: v.id.clone(), mode: RuleMode::AlwaysDeny }
        );
    }

    #[test]
    fn every_cap_choice_is_accepted() {
        let v = venue();
        let mut book = tipjar_core::VenueBook::new(vec![v.clone()]);
        for cap in CAP_CHOICES {
            assert!(book.set_cap(&v.id, Some(cap)).is_ok(), "cap {} rejected", cap);
        }
        assert_eq!(CAP_CHOICES.end(), &MAX_WEEKLY_CAP);
    }

    #[test]
    fn draft_round_trips_custom_hours() {
        let mut v = venue();
        v.quiet_hours = QuietHoursOverride::Custom(QuietHours::parse("22:30", "06:00").unwrap());
        let draft = VenueDraft::from_venue(&v);
        assert_eq!(draft.quiet, QuietChoice::Custom);
        assert_eq!(draft.quiet_start, "22:30");
        assert!(draft.commands(&v).unwrap().is_empty());
    }
}
