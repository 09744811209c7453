//! Simulated backend calls.
//!
//! There is no server: every "network" action sleeps for a configurable
//! latency and may fail at random so the screens can show loading states,
//! error banners and retry.

use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{TipError, TipResult};

#[derive(Debug, Clone, PartialEq)]
pub struct MockNetwork {
    latency: Duration,
    jitter: Duration,
    failure_rate: f64,
}

impl Default for MockNetwork {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(600),
            jitter: Duration::ZERO,
            failure_rate: 0.0,
        }
    }
}

impl MockNetwork {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            ..Default::default()
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Duration::from_millis(config.latency_ms))
            .with_jitter(Duration::from_millis(config.latency_jitter_ms))
            .with_failure_rate(config.refresh_failure_rate)
    }

    /// Probability in [0, 1] that a fallible call fails.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    fn delay(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            self.latency
        } else {
            self.latency + Duration::from_millis(rand::random_range(0..=jitter_ms))
        }
    }

    /// A call that always succeeds after the latency.
    pub async fn call(&self, what: &str) -> TipResult<()> {
        tracing::debug!(what, "mock call started");
        tokio::time::sleep(self.delay()).await;
        Ok(())
    }

    /// A call that fails with probability `failure_rate`.
    pub async fn fallible_call(&self, what: &str) -> TipResult<()> {
        self.call(what).await?;
        if self.failure_rate > 0.0 && rand::random::<f64>() < self.failure_rate {
            tracing::warn!(what, "mock call failed");
            return Err(TipError::Network(format!("Couldn't {}. Check your connection.", what)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn call_waits_for_latency() {
        let net = MockNetwork::new(Duration::from_millis(800));
        let started = tokio::time::Instant::now();
        net.call("sync").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn certain_failure() {
        let net = MockNetwork::new(Duration::from_millis(10)).with_failure_rate(1.0);
        let err = net.fallible_call("refresh tips").await.unwrap_err();
        assert!(matches!(err, TipError::Network(msg) if msg.contains("refresh tips")));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_rate_never_fails() {
        let net = MockNetwork::new(Duration::from_millis(10)).with_failure_rate(0.0);
        for _ in 0..50 {
            net.fallible_call("refresh tips").await.unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn jitter_stays_in_bounds() {
        let net = MockNetwork::new(Duration::from_millis(100)).with_jitter(Duration::from_millis(50));
        let started = tokio::time::Instant::now();
        net.call("x").await.unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed <= Duration::from_millis(151));
    }

    #[test]
    fn config_rate_is_clamped() {
        let config = AppConfig {
            refresh_failure_rate: 4.0,
            latency_jitter_ms: 25,
            ..AppConfig::default()
        };
        let net = MockNetwork::from_config(&config);
        assert_eq!(net.failure_rate(), 1.0);
        assert_eq!(net.jitter, Duration::from_millis(25));
    }

    #[test]
    fn rate_is_clamped() {
        assert_eq!(MockNetwork::default().with_failure_rate(3.0).failure_rate(), 1.0);
        assert_eq!(MockNetwork::default().with_failure_rate(-1.0).failure_rate(), 0.0);
    }
}
