//! Per-venue reminder rules.
//!
//! A [`VenueBook`] owns the venue collection for the reminders screen and
//! exposes one method per user intent. Every mutation replaces the affected
//! records in a single step, so callers never observe a half-applied edit.
//!
//! Views are derived with [`venue_view`], a pure function of the venue slice,
//! the active [`VenueFilter`] and the current time.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{TipError, TipResult};
use crate::filter::matches_query;
use crate::format::DAY_MS;
use crate::score::{weighted_sum, Score};
use crate::toast::Toast;

/// Largest weekly reminder cap a venue may override to.
pub const MAX_WEEKLY_CAP: u32 = 20;

/// Venues visited within this many days show under the "Recent" tab.
pub const RECENT_DAYS: i64 = 14;

/// Unique identifier for a venue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VenueId(pub String);

impl VenueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VenueCategory {
    Cafe,
    Restaurant,
    Bar,
    Salon,
    Delivery,
    Rideshare,
    Hotel,
}

impl VenueCategory {
    pub const ALL: [VenueCategory; 7] = [
        VenueCategory::Cafe,
        VenueCategory::Restaurant,
        VenueCategory::Bar,
        VenueCategory::Salon,
        VenueCategory::Delivery,
        VenueCategory::Rideshare,
        VenueCategory::Hotel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VenueCategory::Cafe => "Cafe",
            VenueCategory::Restaurant => "Restaurant",
            VenueCategory::Bar => "Bar",
            VenueCategory::Salon => "Salon",
            VenueCategory::Delivery => "Delivery",
            VenueCategory::Rideshare => "Rideshare",
            VenueCategory::Hotel => "Hotel",
        }
    }
}

/// Per-venue override of the global reminder policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuleMode {
    #[default]
    FollowGlobal,
    AlwaysAllow,
    AlwaysDeny,
}

impl RuleMode {
    pub const ALL: [RuleMode; 3] = [RuleMode::FollowGlobal, RuleMode::AlwaysAllow, RuleMode::AlwaysDeny];

    pub fn label(&self) -> &'static str {
        match self {
            RuleMode::FollowGlobal => "Follow global",
            RuleMode::AlwaysAllow => "Always allow",
            RuleMode::AlwaysDeny => "Always deny",
        }
    }

    /// Chip colour class for the rule badge.
    pub fn chip_tone(&self) -> &'static str {
        match self {
            RuleMode::FollowGlobal => "neutral",
            RuleMode::AlwaysAllow => "allow",
            RuleMode::AlwaysDeny => "deny",
        }
    }
}

/// A daily window in which reminders are held back.
///
/// `end` earlier than `start` means the window wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuietHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl QuietHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parse `HH:MM` inputs from the edit sheet. Both ends are required.
    pub fn parse(start: &str, end: &str) -> TipResult<Self> {
        let start = start.trim();
        let end = end.trim();
        if start.is_empty() || end.is_empty() {
            return Err(TipError::InvalidQuietHours(
                "custom quiet hours need a start and an end".to_string(),
            ));
        }
        let parse = |s: &str| {
            NaiveTime::parse_from_str(s, "%H:%M")
                .map_err(|e| TipError::InvalidQuietHours(format!("{}: {}", s, e)))
        };
        let (start, end) = (parse(start)?, parse(end)?);
        if start == end {
            return Err(TipError::InvalidQuietHours(
                "start and end must differ".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.start < self.end {
            time >= self.start && time < self.end
        } else {
            time >= self.start || time < self.end
        }
    }

    pub fn label(&self) -> String {
        format!("{}\u{2013}{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuietHoursOverride {
    #[default]
    FollowGlobal,
    Off,
    Custom(QuietHours),
}

/// A place the user has tipped at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub category: VenueCategory,
    pub address: String,
    /// Unix ms of the most recent visit
    pub last_visit: i64,
    pub visits: u32,
    pub favorite: bool,
    pub rule: RuleMode,
    /// Weekly reminder cap override
    pub cap: Option<u32>,
    pub quiet_hours: QuietHoursOverride,
    pub note: String,
}

impl Venue {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: VenueCategory,
        address: impl Into<String>,
        last_visit: i64,
    ) -> Self {
        Self {
            id: VenueId::new(id),
            name: name.into(),
            category,
            address: address.into(),
            last_visit,
            visits: 1,
            favorite: false,
            rule: RuleMode::FollowGlobal,
            cap: None,
            quiet_hours: QuietHoursOverride::FollowGlobal,
            note: String::new(),
        }
    }

    /// Whether cap or quiet hours deviate from the global policy.
    pub fn has_overrides(&self) -> bool {
        self.cap.is_some() || self.quiet_hours != QuietHoursOverride::FollowGlobal
    }

    pub fn is_customized(&self) -> bool {
        self.rule != RuleMode::FollowGlobal || self.has_overrides() || !self.note.trim().is_empty()
    }

    pub fn chip_tone(&self) -> &'static str {
        self.rule.chip_tone()
    }

    /// One-line description of the venue's rule for list rows.
    pub fn summary(&self) -> String {
        let mut parts = vec![match self.rule {
            RuleMode::FollowGlobal => "Follows global".to_string(),
            RuleMode::AlwaysAllow => "Always reminds".to_string(),
            RuleMode::AlwaysDeny => "Never reminds".to_string(),
        }];
        if let Some(cap) = self.cap {
            parts.push(format!("cap {}/wk", cap));
        }
        match self.quiet_hours {
            QuietHoursOverride::FollowGlobal => {}
            QuietHoursOverride::Off => parts.push("no quiet hours".to_string()),
            QuietHoursOverride::Custom(q) => parts.push(format!("quiet {}", q.label())),
        }
        parts.join(" \u{00B7} ")
    }

    /// Recency-weighted ordering score, higher sorts first.
    pub fn sort_score(&self, now: i64) -> i64 {
        let days_since = ((now - self.last_visit).max(0)) / DAY_MS;
        let favorite = if self.favorite { 50 } else { 0 };
        let recency = (30 - days_since).max(0) * 2;
        let frequency = i64::from(self.visits.min(20));
        favorite + recency + frequency
    }
}

/// Account-wide reminder policy the venues may follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalPolicy {
    pub reminders_enabled: bool,
    pub weekly_cap: u32,
    pub quiet_hours: Option<QuietHours>,
}

impl Default for GlobalPolicy {
    fn default() -> Self {
        Self {
            reminders_enabled: true,
            weekly_cap: 3,
            quiet_hours: NaiveTime::from_hms_opt(22, 0, 0)
                .zip(NaiveTime::from_hms_opt(7, 0, 0))
                .map(|(start, end)| QuietHours::new(start, end)),
        }
    }
}

/// What actually applies to a venue once overrides are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectivePolicy {
    pub reminds: bool,
    pub weekly_cap: u32,
    pub quiet_hours: Option<QuietHours>,
}

pub fn effective_policy(venue: &Venue, global: &GlobalPolicy) -> EffectivePolicy {
    let reminds = match venue.rule {
        RuleMode::FollowGlobal => global.reminders_enabled,
        RuleMode::AlwaysAllow => true,
        RuleMode::AlwaysDeny => false,
    };
    let quiet_hours = match venue.quiet_hours {
        QuietHoursOverride::FollowGlobal => global.quiet_hours,
        QuietHoursOverride::Off => None,
        QuietHoursOverride::Custom(q) => Some(q),
    };
    EffectivePolicy {
        reminds,
        weekly_cap: venue.cap.unwrap_or(global.weekly_cap),
        quiet_hours,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VenueTab {
    #[default]
    All,
    Favorites,
    Recent,
    Custom,
}

impl VenueTab {
    pub const ALL: [VenueTab; 4] = [VenueTab::All, VenueTab::Favorites, VenueTab::Recent, VenueTab::Custom];

    pub fn label(&self) -> &'static str {
        match self {
            VenueTab::All => "All",
            VenueTab::Favorites => "Favorites",
            VenueTab::Recent => "Recent",
            VenueTab::Custom => "Custom rules",
        }
    }

    pub fn matches(&self, venue: &Venue, now: i64) -> bool {
        match self {
            VenueTab::All => true,
            VenueTab::Favorites => venue.favorite,
            VenueTab::Recent => now - venue.last_visit <= RECENT_DAYS * DAY_MS,
            VenueTab::Custom => venue.is_customized(),
        }
    }
}

/// Current selections on the reminders screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueFilter {
    pub query: String,
    pub tab: VenueTab,
    pub rule: Option<RuleMode>,
    pub category: Option<VenueCategory>,
}

impl VenueFilter {
    pub fn matches(&self, venue: &Venue, now: i64) -> bool {
        matches_query(
            &self.query,
            &[&venue.name, venue.category.label(), &venue.address],
        ) && self.tab.matches(venue, now)
            && self.rule.map_or(true, |rule| venue.rule == rule)
            && self.category.map_or(true, |cat| venue.category == cat)
    }
}

/// Derived view for the reminders screen
#[derive(Debug, Clone, PartialEq)]
pub struct VenueView {
    pub venues: Vec<Venue>,
    pub total: usize,
    pub favorites: usize,
    pub customized: usize,
    pub personalization: Score,
}

/// Filter, sort and summarise the venue collection.
pub fn venue_view(venues: &[Venue], filter: &VenueFilter, now: i64) -> VenueView {
    let mut matched: Vec<Venue> = venues
        .iter()
        .filter(|v| filter.matches(v, now))
        .cloned()
        .collect();
    // stable: equal scores keep collection order
    matched.sort_by_key(|v| std::cmp::Reverse(v.sort_score(now)));

    VenueView {
        venues: matched,
        total: venues.len(),
        favorites: venues.iter().filter(|v| v.favorite).count(),
        customized: venues.iter().filter(|v| v.is_customized()).count(),
        personalization: personalization(venues),
    }
}

/// How much the user has tailored reminders, as a percentage.
pub fn personalization(venues: &[Venue]) -> Score {
    let any = |pred: fn(&Venue) -> bool| venues.iter().any(pred);
    let points = weighted_sum(&[
        (any(|v| v.favorite), 20),
        (any(|v| v.rule == RuleMode::AlwaysAllow), 20),
        (any(|v| v.rule == RuleMode::AlwaysDeny), 15),
        (any(|v| v.cap.is_some()), 15),
        (any(|v| v.quiet_hours != QuietHoursOverride::FollowGlobal), 15),
        (any(|v| !v.note.trim().is_empty()), 15),
    ]);
    Score::from_points(points)
}

pub fn personalization_label(score: &Score) -> &'static str {
    match score.band {
        crate::score::ScoreBand::High => "Tailored",
        crate::score::ScoreBand::Mid => "Partly tailored",
        crate::score::ScoreBand::Low => "Defaults",
    }
}

/// Which venues a bulk action applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BulkTarget {
    #[default]
    All,
    Favorites,
    Allowed,
    Denied,
}

impl BulkTarget {
    pub const ALL: [BulkTarget; 4] = [BulkTarget::All, BulkTarget::Favorites, BulkTarget::Allowed, BulkTarget::Denied];

    pub fn label(&self) -> &'static str {
        match self {
            BulkTarget::All => "All venues",
            BulkTarget::Favorites => "Favorites",
            BulkTarget::Allowed => "Always allowed",
            BulkTarget::Denied => "Always denied",
        }
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        match self {
            BulkTarget::All => true,
            BulkTarget::Favorites => venue.favorite,
            BulkTarget::Allowed => venue.rule == RuleMode::AlwaysAllow,
            BulkTarget::Denied => venue.rule == RuleMode::AlwaysDeny,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BulkAction {
    #[default]
    Allow,
    Deny,
    Clear,
}

impl BulkAction {
    pub const ALL: [BulkAction; 3] = [BulkAction::Allow, BulkAction::Deny, BulkAction::Clear];

    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::Allow => "Always allow",
            BulkAction::Deny => "Always deny",
            BulkAction::Clear => "Reset to global",
        }
    }

    pub fn rule(&self) -> RuleMode {
        match self {
            BulkAction::Allow => RuleMode::AlwaysAllow,
            BulkAction::Deny => RuleMode::AlwaysDeny,
            BulkAction::Clear => RuleMode::FollowGlobal,
        }
    }
}

/// User intents on the reminders screen.
#[derive(Debug, Clone, PartialEq)]
pub enum VenueCommand {
    SetRule { id: VenueId, mode: RuleMode },
    ToggleFavorite(VenueId),
    ApplyBulk { target: BulkTarget, action: BulkAction },
    SetNote { id: VenueId, note: String },
    SetCap { id: VenueId, cap: Option<u32> },
    SetQuietHours { id: VenueId, quiet_hours: QuietHoursOverride },
    Reset(VenueId),
}

/// Venue collection for one reminders screen instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueBook {
    venues: Vec<Venue>,
}

impl VenueBook {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn get(&self, id: &VenueId) -> Option<&Venue> {
        self.venues.iter().find(|v| &v.id == id)
    }

    pub fn view(&self, filter: &VenueFilter, now: i64) -> VenueView {
        venue_view(&self.venues, filter, now)
    }

    /// Dispatch a command and describe the outcome for a toast.
    pub fn apply(&mut self, command: VenueCommand) -> TipResult<Toast> {
        tracing::debug!(?command, "venue command");
        let result = match command {
            VenueCommand::SetRule { id, mode } => self
                .set_rule(&id, mode)
                .map(|name| Toast::success(format!("{}: {}", name, mode.label()))),
            VenueCommand::ToggleFavorite(id) => self.toggle_favorite(&id).map(|fav| {
                if fav {
                    Toast::success("Added to favorites")
                } else {
                    Toast::info("Removed from favorites")
                }
            }),
            VenueCommand::ApplyBulk { target, action } => {
                let changed = self.apply_bulk(target, action);
                Ok(if changed == 0 {
                    Toast::info(format!("No venues in \"{}\"", target.label()))
                } else {
                    Toast::success(format!(
                        "{} applied to {} venue{}",
                        action.label(),
                        changed,
                        if changed == 1 { "" } else { "s" }
                    ))
                })
            }
            VenueCommand::SetNote { id, note } => {
                self.set_note(&id, note).map(|_| Toast::success("Note saved"))
            }
            VenueCommand::SetCap { id, cap } => self.set_cap(&id, cap).map(|_| match cap {
                Some(cap) => Toast::success(format!("Cap set to {}/wk", cap)),
                None => Toast::info("Cap follows global"),
            }),
            VenueCommand::SetQuietHours { id, quiet_hours } => self
                .set_quiet_hours(&id, quiet_hours)
                .map(|_| Toast::success("Quiet hours updated")),
            VenueCommand::Reset(id) => self.reset(&id).map(|_| Toast::info("Venue reset to global")),
        };
        if let Err(ref e) = result {
            tracing::warn!("venue command rejected: {}", e);
        }
        result
    }

    /// Apply `commands` in order, all or nothing. On error the book is
    /// left as it was; on success the toasts come back in command order.
    pub fn apply_all(&mut self, commands: Vec<VenueCommand>) -> TipResult<Vec<Toast>> {
        let mut staged = self.clone();
        let toasts = commands
            .into_iter()
            .map(|command| staged.apply(command))
            .collect::<TipResult<Vec<_>>>()?;
        *self = staged;
        Ok(toasts)
    }

    /// Replace one venue's rule. Returns the venue name.
    pub fn set_rule(&mut self, id: &VenueId, mode: RuleMode) -> TipResult<String> {
        let venue = self.venue_mut(id)?;
        venue.rule = mode;
        Ok(venue.name.clone())
    }

    /// Flip favorite; returns the new favorite state.
    ///
    /// Favoriting a venue that follows the global rule upgrades it to
    /// `AlwaysAllow`. Unfavoriting never downgrades.
    pub fn toggle_favorite(&mut self, id: &VenueId) -> TipResult<bool> {
        let venue = self.venue_mut(id)?;
        venue.favorite = !venue.favorite;
        if venue.favorite && venue.rule == RuleMode::FollowGlobal {
            venue.rule = RuleMode::AlwaysAllow;
        }
        Ok(venue.favorite)
    }

    /// Apply `action` to every venue in `target`; returns how many matched.
    pub fn apply_bulk(&mut self, target: BulkTarget, action: BulkAction) -> usize {
        let rule = action.rule();
        let mut changed = 0;
        let next: Vec<Venue> = self
            .venues
            .iter()
            .map(|v| {
                if target.matches(v) {
                    changed += 1;
                    Venue { rule, ..v.clone() }
                } else {
                    v.clone()
                }
            })
            .collect();
        self.venues = next;
        tracing::debug!(?target, ?action, changed, "bulk applied");
        changed
    }

    pub fn set_note(&mut self, id: &VenueId, note: String) -> TipResult<()> {
        self.venue_mut(id)?.note = note.trim().to_string();
        Ok(())
    }

    pub fn set_cap(&mut self, id: &VenueId, cap: Option<u32>) -> TipResult<()> {
        if let Some(c) = cap {
            if c == 0 || c > MAX_WEEKLY_CAP {
                return Err(TipError::InvalidCap(c));
            }
        }
        self.venue_mut(id)?.cap = cap;
        Ok(())
    }

    pub fn set_quiet_hours(&mut self, id: &VenueId, quiet_hours: QuietHoursOverride) -> TipResult<()> {
        self.venue_mut(id)?.quiet_hours = quiet_hours;
        Ok(())
    }

    /// Drop every override (rule, cap, quiet hours, note). Favorite stays.
    pub fn reset(&mut self, id: &VenueId) -> TipResult<()> {
        let venue = self.venue_mut(id)?;
        venue.rule = RuleMode::FollowGlobal;
        venue.cap = None;
        venue.quiet_hours = QuietHoursOverride::FollowGlobal;
        venue.note.clear();
        Ok(())
    }

    fn venue_mut(&mut self, id: &VenueId) -> TipResult<&mut Venue> {
        self.venues
            .iter_mut()
            .find(|v| &v.id == id)
            .ok_or_else(|| TipError::VenueNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 400 * DAY_MS;

    fn venue(id: &str, days_ago: i64) -> Venue {
        Venue::new(id, format!("Venue {}", id), VenueCategory::Cafe, "1 Main St", NOW - days_ago * DAY_MS)
    }

    fn book() -> VenueBook {
        let mut fav = venue("a", 1);
        fav.favorite = true;
        fav.rule = RuleMode::AlwaysAllow;
        let mut denied = venue("b", 3);
        denied.rule = RuleMode::AlwaysDeny;
        VenueBook::new(vec![fav, denied, venue("c", 40)])
    }

    #[test]
    fn chip_tone_per_rule() {
        let mut v = venue("x", 0);
        v.rule = RuleMode::AlwaysDeny;
        assert_eq!(v.chip_tone(), "deny");
        v.rule = RuleMode::AlwaysAllow;
        assert_eq!(v.chip_tone(), "allow");
        v.rule = RuleMode::FollowGlobal;
        assert_eq!(v.chip_tone(), "neutral");
    }

    #[test]
    fn summary_mentions_overrides() {
        let mut v = venue("x", 0);
        assert!(v.summary().contains("Follows global"));
        v.rule = RuleMode::AlwaysAllow;
        v.cap = Some(3);
        assert_eq!(v.summary(), "Always reminds \u{00B7} cap 3/wk");
        v.quiet_hours = QuietHoursOverride::Off;
        assert!(v.summary().ends_with("no quiet hours"));
    }

    #[test]
    fn favorite_upgrades_follow_global() {
        let mut book = book();
        let id = VenueId::new("c");
        assert!(book.toggle_favorite(&id).unwrap());
        assert_eq!(book.get(&id).unwrap().rule, RuleMode::AlwaysAllow);

        assert!(!book.toggle_favorite(&id).unwrap());
        assert_eq!(book.get(&id).unwrap().rule, RuleMode::AlwaysAllow);
    }

    #[test]
    fn favorite_keeps_explicit_deny() {
        let mut book = book();
        let id = VenueId::new("b");
        book.toggle_favorite(&id).unwrap();
        assert_eq!(book.get(&id).unwrap().rule, RuleMode::AlwaysDeny);
    }

    #[test]
    fn bulk_deny_favorites_only() {
        let mut book = book();
        let changed = book.apply_bulk(BulkTarget::Favorites, BulkAction::Deny);
        assert_eq!(changed, 1);
        assert_eq!(book.get(&VenueId::new("a")).unwrap().rule, RuleMode::AlwaysDeny);
        assert_eq!(book.get(&VenueId::new("c")).unwrap().rule, RuleMode::FollowGlobal);
    }

    #[test]
    fn bulk_clear_denied() {
        let mut book = book();
        assert_eq!(book.apply_bulk(BulkTarget::Denied, BulkAction::Clear), 1);
        assert!(book.venues().iter().all(|v| v.rule != RuleMode::AlwaysDeny));
    }

    #[test]
    fn unknown_venue_is_error() {
        let mut book = book();
        let err = book.set_rule(&VenueId::new("zzz"), RuleMode::AlwaysDeny).unwrap_err();
        assert!(matches!(err, TipError::VenueNotFound(_)));
    }

    #[test]
    fn apply_all_is_all_or_nothing() {
        let mut book = book();
        let before = book.clone();
        let id = VenueId::new("c");
        let result = book.apply_all(vec![
            VenueCommand::SetRule { id: id.clone(), mode: RuleMode::AlwaysDeny },
            VenueCommand::SetNote { id: id.clone(), note: "cash only".to_string() },
            VenueCommand::SetCap { id: id.clone(), cap: Some(MAX_WEEKLY_CAP + 1) },
        ]);
        assert!(result.is_err());
        assert_eq!(book, before);

        let toasts = book
            .apply_all(vec![
                VenueCommand::SetRule { id: id.clone(), mode: RuleMode::AlwaysDeny },
                VenueCommand::SetCap { id: id.clone(), cap: Some(2) },
            ])
            .unwrap();
        assert_eq!(toasts.len(), 2);
        let venue = book.get(&id).unwrap();
        assert_eq!(venue.rule, RuleMode::AlwaysDeny);
        assert_eq!(venue.cap, Some(2));
    }

    #[test]
    fn cap_bounds() {
        let mut book = book();
        let id = VenueId::new("a");
        assert!(matches!(book.set_cap(&id, Some(0)), Err(TipError::InvalidCap(0))));
        assert!(book.set_cap(&id, Some(MAX_WEEKLY_CAP + 1)).is_err());
        book.set_cap(&id, Some(5)).unwrap();
        assert_eq!(book.get(&id).unwrap().cap, Some(5));
    }

    #[test]
    fn quiet_hours_parse_requires_both() {
        assert!(QuietHours::parse("22:00", "").is_err());
        assert!(QuietHours::parse("", "07:00").is_err());
        assert!(QuietHours::parse("25:00", "07:00").is_err());
        let q = QuietHours::parse("22:00", "07:00").unwrap();
        assert_eq!(q.label(), "22:00\u{2013}07:00");
    }

    #[test]
    fn quiet_hours_wraps_midnight() {
        let q = QuietHours::parse("22:00", "07:00").unwrap();
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert!(q.contains(at(23, 30)));
        assert!(q.contains(at(6, 59)));
        assert!(!q.contains(at(12, 0)));

        let day = QuietHours::parse("09:00", "17:00").unwrap();
        assert!(day.contains(at(9, 0)));
        assert!(!day.contains(at(17, 0)));
    }

    #[test]
    fn view_sorts_by_recency_score() {
        let book = book();
        let view = book.view(&VenueFilter::default(), NOW);
        let ids: Vec<&str> = view.venues.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(view.total, 3);
        assert_eq!(view.favorites, 1);
    }

    #[test]
    fn view_ties_keep_collection_order() {
        let book = VenueBook::new(vec![venue("z", 2), venue("y", 2), venue("x", 2)]);
        let view = book.view(&VenueFilter::default(), NOW);
        let ids: Vec<&str> = view.venues.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "y", "x"]);
    }

    #[test]
    fn filters_compose() {
        let book = book();
        let filter = VenueFilter {
            tab: VenueTab::Recent,
            rule: Some(RuleMode::AlwaysDeny),
            ..Default::default()
        };
        let view = book.view(&filter, NOW);
        assert_eq!(view.venues.len(), 1);
        assert_eq!(view.venues[0].id.as_str(), "b");

        let none = book.view(
            &VenueFilter {
                query: "no such place".to_string(),
                ..Default::default()
            },
            NOW,
        );
        assert!(none.venues.is_empty());
    }

    #[test]
    fn personalization_weights() {
        assert_eq!(personalization(&[venue("q", 0)]).value, 0);
        let book = book();
        // favorite 20 + allow 20 + deny 15
        let score = personalization(book.venues());
        assert_eq!(score.value, 55);
        assert_eq!(personalization_label(&score), "Partly tailored");
    }

    #[test]
    fn effective_policy_resolves_overrides() {
        let global = GlobalPolicy::default();
        let mut v = venue("e", 0);
        let eff = effective_policy(&v, &global);
        assert!(eff.reminds);
        assert_eq!(eff.weekly_cap, 3);
        assert_eq!(eff.quiet_hours, global.quiet_hours);

        v.rule = RuleMode::AlwaysDeny;
        v.cap = Some(7);
        v.quiet_hours = QuietHoursOverride::Off;
        let eff = effective_policy(&v, &global);
        assert!(!eff.reminds);
        assert_eq!(eff.weekly_cap, 7);
        assert_eq!(eff.quiet_hours, None);
    }

    #[test]
    fn apply_reports_bulk_count() {
        let mut book = book();
        let toast = book
            .apply(VenueCommand::ApplyBulk {
                target: BulkTarget::All,
                action: BulkAction::Allow,
            })
            .unwrap();
        assert!(toast.message.contains("3 venues"));
    }

    #[test]
    fn reset_keeps_favorite() {
        let mut book = book();
        let id = VenueId::new("a");
        book.set_note(&id, "  ask for Sam ".to_string()).unwrap();
        assert_eq!(book.get(&id).unwrap().note, "ask for Sam");
        book.reset(&id).unwrap();
        let v = book.get(&id).unwrap();
        assert!(v.favorite);
        assert_eq!(v.rule, RuleMode::FollowGlobal);
        assert!(v.note.is_empty());
    }
}
