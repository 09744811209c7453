//! Device sessions, security settings and the audit trail.
//!
//! [`SecurityCenter`] owns everything the security screen shows. Each
//! security-relevant mutation prepends exactly one [`SecurityEvent`]; events
//! are never edited or removed. The device running the app is protected:
//! no command removes it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{TipError, TipResult};
use crate::score::{weighted_sum, Score, ScoreBand};
use crate::toast::Toast;

/// Unique identifier for a device session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(pub String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Phone,
    Laptop,
}

impl DeviceKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::Phone => "Phone",
            DeviceKind::Laptop => "Laptop",
        }
    }
}

/// A signed-in session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
    pub os: String,
    pub location: String,
    /// Unix ms of last activity
    pub last_active: i64,
    pub trusted: bool,
    /// The session this app is running in
    pub current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warn,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Info => "event-info",
            Severity::Warn => "event-warn",
        }
    }
}

/// Append-only audit record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub id: Ulid,
    pub title: String,
    pub detail: String,
    pub at: i64,
    pub level: Severity,
}

impl SecurityEvent {
    pub fn new(title: impl Into<String>, detail: impl Into<String>, at: i64, level: Severity) -> Self {
        Self {
            id: Ulid::new(),
            title: title.into(),
            detail: detail.into(),
            at,
            level,
        }
    }
}

/// Account protection switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor: bool,
    pub passkey: bool,
    pub biometric_lock: bool,
    pub login_alerts: bool,
    pub recovery_email_verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecuritySetting {
    TwoFactor,
    Passkey,
    BiometricLock,
    LoginAlerts,
    RecoveryEmail,
}

impl SecuritySetting {
    pub const ALL: [SecuritySetting; 5] = [
        SecuritySetting::TwoFactor,
        SecuritySetting::Passkey,
        SecuritySetting::BiometricLock,
        SecuritySetting::LoginAlerts,
        SecuritySetting::RecoveryEmail,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SecuritySetting::TwoFactor => "Two-factor authentication",
            SecuritySetting::Passkey => "Passkey sign-in",
            SecuritySetting::BiometricLock => "Biometric app lock",
            SecuritySetting::LoginAlerts => "New sign-in alerts",
            SecuritySetting::RecoveryEmail => "Recovery email verified",
        }
    }
}

impl SecuritySettings {
    pub fn get(&self, setting: SecuritySetting) -> bool {
        match setting {
            SecuritySetting::TwoFactor => self.two_factor,
            SecuritySetting::Passkey => self.passkey,
            SecuritySetting::BiometricLock => self.biometric_lock,
            SecuritySetting::LoginAlerts => self.login_alerts,
            SecuritySetting::RecoveryEmail => self.recovery_email_verified,
        }
    }

    fn slot(&mut self, setting: SecuritySetting) -> &mut bool {
        match setting {
            SecuritySetting::TwoFactor => &mut self.two_factor,
            SecuritySetting::Passkey => &mut self.passkey,
            SecuritySetting::BiometricLock => &mut self.biometric_lock,
            SecuritySetting::LoginAlerts => &mut self.login_alerts,
            SecuritySetting::RecoveryEmail => &mut self.recovery_email_verified,
        }
    }
}

/// Weighted security score over settings and device trust.
pub fn security_score(settings: &SecuritySettings, devices: &[Device]) -> Score {
    let untrusted_others = devices.iter().filter(|d| !d.current && !d.trusted).count() as i32;
    let points = weighted_sum(&[
        (settings.two_factor, 30),
        (settings.passkey, 20),
        (settings.biometric_lock, 15),
        (settings.login_alerts, 10),
        (settings.recovery_email_verified, 15),
        (untrusted_others == 0, 10),
    ]) - 10 * untrusted_others;
    Score::from_points(points)
}

pub fn security_label(score: &Score) -> &'static str {
    match score.band {
        ScoreBand::High => "Strong",
        ScoreBand::Mid => "Good",
        ScoreBand::Low => "At risk",
    }
}

/// User intents on the security screen.
#[derive(Debug, Clone, PartialEq)]
pub enum SecurityCommand {
    Revoke(DeviceId),
    SetTrust { id: DeviceId, trusted: bool },
    RevokeAllOthers,
    ToggleSetting(SecuritySetting),
}

/// Derived view for the security screen
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityView {
    /// Current device first, then most recently active
    pub devices: Vec<Device>,
    pub trusted: usize,
    pub untrusted: usize,
    pub score: Score,
    pub events: Vec<SecurityEvent>,
}

/// Session list, settings and audit log for one security screen instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityCenter {
    devices: Vec<Device>,
    events: VecDeque<SecurityEvent>,
    settings: SecuritySettings,
}

impl SecurityCenter {
    /// `events` are expected newest first.
    pub fn new(devices: Vec<Device>, events: Vec<SecurityEvent>, settings: SecuritySettings) -> Self {
        Self {
            devices,
            events: events.into(),
            settings,
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Newest first.
    pub fn events(&self) -> impl Iterator<Item = &SecurityEvent> {
        self.events.iter()
    }

    pub fn settings(&self) -> &SecuritySettings {
        &self.settings
    }

    pub fn score(&self) -> Score {
        security_score(&self.settings, &self.devices)
    }

    pub fn view(&self, level: Option<Severity>) -> SecurityView {
        let mut devices = self.devices.clone();
        devices.sort_by(|a, b| {
            b.current
                .cmp(&a.current)
                .then_with(|| b.last_active.cmp(&a.last_active))
        });
        let trusted = self.devices.iter().filter(|d| d.trusted).count();
        SecurityView {
            untrusted: self.devices.len() - trusted,
            trusted,
            devices,
            score: self.score(),
            events: self
                .events
                .iter()
                .filter(|e| level.map_or(true, |l| e.level == l))
                .cloned()
                .collect(),
        }
    }

    /// Dispatch a command and describe the outcome for a toast.
    pub fn apply(&mut self, command: SecurityCommand, now: i64) -> TipResult<Toast> {
        tracing::debug!(?command, "security command");
        let result = match command {
            SecurityCommand::Revoke(id) => self
                .revoke_device(&id, now)
                .map(|name| Toast::success(format!("Signed out {}", name))),
            SecurityCommand::SetTrust { id, trusted } => {
                self.set_device_trust(&id, trusted, now).map(|name| {
                    if trusted {
                        Toast::success(format!("{} is now trusted", name))
                    } else {
                        Toast::warn(format!("{} will need verification", name))
                    }
                })
            }
            SecurityCommand::RevokeAllOthers => {
                let removed = self.revoke_all_others(now);
                Ok(if removed == 0 {
                    Toast::info("No other sessions to sign out")
                } else {
                    Toast::success(format!(
                        "Signed out {} other session{}",
                        removed,
                        if removed == 1 { "" } else { "s" }
                    ))
                })
            }
            SecurityCommand::ToggleSetting(setting) => {
                let on = self.toggle_setting(setting, now);
                Ok(Toast::info(format!(
                    "{} {}",
                    setting.label(),
                    if on { "on" } else { "off" }
                )))
            }
        };
        if let Err(ref e) = result {
            tracing::warn!("security command rejected: {}", e);
        }
        result
    }

    /// Remove a non-current device. Returns its name.
    pub fn revoke_device(&mut self, id: &DeviceId, now: i64) -> TipResult<String> {
        let device = self
            .devices
            .iter()
            .find(|d| &d.id == id)
            .ok_or_else(|| TipError::DeviceNotFound(id.to_string()))?;
        if device.current {
            return Err(TipError::CurrentDeviceProtected(id.to_string()));
        }
        let name = device.name.clone();
        let detail = format!("{} \u{00B7} {}", device.os, device.location);

        self.devices.retain(|d| &d.id != id);
        self.record(SecurityEvent::new(
            format!("Signed out {}", name),
            detail,
            now,
            Severity::Info,
        ));
        tracing::info!(device = %id, "device revoked");
        Ok(name)
    }

    /// Update a device's trust flag. Returns its name.
    pub fn set_device_trust(&mut self, id: &DeviceId, trusted: bool, now: i64) -> TipResult<String> {
        let device = self
            .devices
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| TipError::DeviceNotFound(id.to_string()))?;
        device.trusted = trusted;
        let name = device.name.clone();

        let event = if trusted {
            SecurityEvent::new(
                format!("Trusted {}", name),
                "Sign-ins from this device skip extra verification",
                now,
                Severity::Info,
            )
        } else {
            SecurityEvent::new(
                format!("Removed trust from {}", name),
                "Next sign-in from this device will need verification",
                now,
                Severity::Warn,
            )
        };
        self.record(event);
        tracing::info!(device = %id, trusted, "device trust changed");
        Ok(name)
    }

    /// Keep only the current device. Returns how many sessions were removed.
    pub fn revoke_all_others(&mut self, now: i64) -> usize {
        let before = self.devices.len();
        self.devices.retain(|d| d.current);
        let removed = before - self.devices.len();
        self.record(SecurityEvent::new(
            "Signed out all other sessions",
            format!("{} session{} ended", removed, if removed == 1 { "" } else { "s" }),
            now,
            Severity::Info,
        ));
        tracing::info!(removed, "revoked all other sessions");
        removed
    }

    /// Flip a setting; returns its new value.
    pub fn toggle_setting(&mut self, setting: SecuritySetting, now: i64) -> bool {
        let slot = self.settings.slot(setting);
        *slot = !*slot;
        let on = *slot;
        let level = if on { Severity::Info } else { Severity::Warn };
        self.record(SecurityEvent::new(
            format!("{} turned {}", setting.label(), if on { "on" } else { "off" }),
            "Changed from this device",
            now,
            level,
        ));
        tracing::info!(?setting, on, "security setting changed");
        on
    }

    fn record(&mut self, event: SecurityEvent) {
        self.events.push_front(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str, trusted: bool, current: bool, last_active: i64) -> Device {
        Device {
            id: DeviceId::new(id),
            name: format!("Device {}", id),
            kind: DeviceKind::Phone,
            os: "iOS 18".to_string(),
            location: "Lisbon".to_string(),
            last_active,
            trusted,
            current,
        }
    }

    fn center() -> SecurityCenter {
        SecurityCenter::new(
            vec![
                device("old", false, false, 10),
                device("me", true, true, 5),
                device("laptop", true, false, 20),
            ],
            vec![],
            SecuritySettings::default(),
        )
    }

    #[test]
    fn revoke_removes_one_and_logs_one() {
        let mut c = center();
        c.revoke_device(&DeviceId::new("old"), 100).unwrap();
        assert_eq!(c.devices().len(), 2);
        assert_eq!(c.events().count(), 1);
        assert_eq!(c.events().next().unwrap().level, Severity::Info);
    }

    #[test]
    fn current_device_cannot_be_revoked() {
        let mut c = center();
        let err = c.revoke_device(&DeviceId::new("me"), 100).unwrap_err();
        assert!(matches!(err, TipError::CurrentDeviceProtected(_)));
        assert_eq!(c.devices().len(), 3);
        assert_eq!(c.events().count(), 0);
    }

    #[test]
    fn trust_direction_sets_severity() {
        let mut c = center();
        c.set_device_trust(&DeviceId::new("laptop"), false, 1).unwrap();
        c.set_device_trust(&DeviceId::new("old"), true, 2).unwrap();
        let levels: Vec<Severity> = c.events().map(|e| e.level).collect();
        assert_eq!(levels, vec![Severity::Info, Severity::Warn]);
    }

    #[test]
    fn revoke_all_keeps_current() {
        let mut c = center();
        assert_eq!(c.revoke_all_others(50), 2);
        assert_eq!(c.devices().len(), 1);
        assert!(c.devices()[0].current);
        assert_eq!(c.events().count(), 1);
        assert_eq!(c.revoke_all_others(60), 0);
        assert_eq!(c.devices().len(), 1);
    }

    #[test]
    fn score_weights_and_penalty() {
        let mut c = center();
        // one untrusted other device: -10, no bonus
        assert_eq!(c.score().value, 0);
        c.toggle_setting(SecuritySetting::TwoFactor, 1);
        c.toggle_setting(SecuritySetting::Passkey, 2);
        assert_eq!(c.score().value, 40);
        assert_eq!(security_label(&c.score()), "Good");

        c.revoke_device(&DeviceId::new("old"), 3).unwrap();
        assert_eq!(c.score().value, 60);
        c.toggle_setting(SecuritySetting::LoginAlerts, 4);
        assert_eq!(c.score().value, 70);
        assert_eq!(security_label(&c.score()), "Strong");
    }

    #[test]
    fn view_orders_current_first() {
        let c = center();
        let view = c.view(None);
        let ids: Vec<String> = view.devices.iter().map(|d| d.id.to_string()).collect();
        assert_eq!(ids, vec!["me", "laptop", "old"]);
        assert_eq!(view.trusted, 2);
        assert_eq!(view.untrusted, 1);
    }

    #[test]
    fn view_filters_events_by_level() {
        let mut c = center();
        c.toggle_setting(SecuritySetting::BiometricLock, 1);
        c.toggle_setting(SecuritySetting::BiometricLock, 2);
        assert_eq!(c.view(Some(Severity::Warn)).events.len(), 1);
        assert_eq!(c.view(None).events.len(), 2);
    }

    #[test]
    fn apply_unknown_device() {
        let mut c = center();
        let res = c.apply(SecurityCommand::Revoke(DeviceId::new("ghost")), 0);
        assert!(matches!(res, Err(TipError::DeviceNotFound(_))));
    }
}
