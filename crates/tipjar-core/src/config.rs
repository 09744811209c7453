//! Application configuration.
//!
//! Read from `<config_dir>/tipjar/config.json` unless a path is given on
//! the command line. Every field has a default, so a partial file (or no
//! file at all) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TipError, TipResult};
use crate::venues::{GlobalPolicy, QuietHours};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long a toast stays on screen
    pub toast_ms: u64,
    /// Base latency of simulated network calls
    pub latency_ms: u64,
    /// Extra random latency, 0..=jitter
    pub latency_jitter_ms: u64,
    /// Probability that a wallet refresh fails
    pub refresh_failure_rate: f64,
    /// Prefix for shareable receipt links
    pub share_base_url: String,
    /// Seed for the generated tip history
    pub wallet_seed: u64,
    pub wallet_size: usize,
    pub global_reminders: bool,
    pub global_weekly_cap: u32,
    /// `HH:MM`, empty to disable
    pub global_quiet_start: String,
    pub global_quiet_end: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            toast_ms: 2_400,
            latency_ms: 700,
            latency_jitter_ms: 500,
            refresh_failure_rate: 0.15,
            share_base_url: "https://tipjar.app".to_string(),
            wallet_seed: 7,
            wallet_size: 36,
            global_reminders: true,
            global_weekly_cap: 3,
            global_quiet_start: "22:00".to_string(),
            global_quiet_end: "07:00".to_string(),
        }
    }
}

impl AppConfig {
    /// Platform config location, `None` when the platform has none.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tipjar").join("config.json"))
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> TipResult<Self> {
        if !path.exists() {
            tracing::debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| TipError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::info!(?path, "loaded config");
        Ok(config.normalized())
    }

    /// Load from `path` or the platform default location.
    pub fn load_or_default(path: Option<&Path>) -> TipResult<Self> {
        match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => Self::load(&p),
            None => Ok(Self::default()),
        }
    }

    fn normalized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.refresh_failure_rate) {
            tracing::warn!(
                rate = self.refresh_failure_rate,
                "refresh_failure_rate outside [0, 1], clamping"
            );
            self.refresh_failure_rate = self.refresh_failure_rate.clamp(0.0, 1.0);
        }
        self
    }

    /// Global reminder policy for the reminders header.
    ///
    /// Unparseable quiet hours are treated as disabled.
    pub fn global_policy(&self) -> GlobalPolicy {
        let quiet_hours = if self.global_quiet_start.trim().is_empty() {
            None
        } else {
            match QuietHours::parse(&self.global_quiet_start, &self.global_quiet_end) {
                Ok(q) => Some(q),
                Err(e) => {
                    tracing::warn!("ignoring global quiet hours: {}", e);
                    None
                }
            }
        };
        GlobalPolicy {
            reminders_enabled: self.global_reminders,
            weekly_cap: self.global_weekly_cap,
            quiet_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut f = fs::File::create(&path).unwrap();
        write!(f, r#"{{ "toast_ms": 900, "wallet_seed": 42 }}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.toast_ms, 900);
        assert_eq!(config.wallet_seed, 42);
        assert_eq!(config.latency_ms, AppConfig::default().latency_ms);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(TipError::Config(_))));
    }

    #[test]
    fn failure_rate_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "refresh_failure_rate": 4.0 }"#).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap().refresh_failure_rate, 1.0);
    }

    #[test]
    fn global_policy_from_config() {
        let policy = AppConfig::default().global_policy();
        assert!(policy.reminders_enabled);
        assert_eq!(policy.weekly_cap, 3);
        assert!(policy.quiet_hours.is_some());

        let config = AppConfig {
            global_quiet_start: "22:00".to_string(),
            global_quiet_end: String::new(),
            ..Default::default()
        };
        assert_eq!(config.global_policy().quiet_hours, None);
    }
}
