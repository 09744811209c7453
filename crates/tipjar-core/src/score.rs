//! Percentage scores built from weighted flags.

use serde::{Deserialize, Serialize};

/// Score at or above which the top label applies.
pub const HIGH_THRESHOLD: u8 = 70;
/// Score at or above which the middle label applies.
pub const MID_THRESHOLD: u8 = 35;

/// Coarse band a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    High,
    Mid,
    Low,
}

impl ScoreBand {
    pub fn for_value(value: u8) -> Self {
        if value >= HIGH_THRESHOLD {
            ScoreBand::High
        } else if value >= MID_THRESHOLD {
            ScoreBand::Mid
        } else {
            ScoreBand::Low
        }
    }

    /// CSS modifier for meters and badges.
    pub fn tone(&self) -> &'static str {
        match self {
            ScoreBand::High => "good",
            ScoreBand::Mid => "fair",
            ScoreBand::Low => "poor",
        }
    }
}

/// A clamped 0..=100 score with its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub value: u8,
    pub band: ScoreBand,
}

impl Score {
    /// Build a score from a raw (possibly negative or >100) point total.
    pub fn from_points(points: i32) -> Self {
        let value = points.clamp(0, 100) as u8;
        Self {
            value,
            band: ScoreBand::for_value(value),
        }
    }
}

/// Sum the weights of every flag that is set.
pub fn weighted_sum(parts: &[(bool, i32)]) -> i32 {
    parts
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, weight)| weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_at_thresholds() {
        assert_eq!(ScoreBand::for_value(70), ScoreBand::High);
        assert_eq!(ScoreBand::for_value(69), ScoreBand::Mid);
        assert_eq!(ScoreBand::for_value(35), ScoreBand::Mid);
        assert_eq!(ScoreBand::for_value(34), ScoreBand::Low);
    }

    #[test]
    fn points_are_clamped() {
        assert_eq!(Score::from_points(-40).value, 0);
        assert_eq!(Score::from_points(140).value, 100);
        assert_eq!(Score::from_points(55).band, ScoreBand::Mid);
    }

    #[test]
    fn weighted_sum_skips_unset() {
        assert_eq!(weighted_sum(&[(true, 30), (false, 20), (true, 5)]), 35);
        assert_eq!(weighted_sum(&[]), 0);
    }
}
