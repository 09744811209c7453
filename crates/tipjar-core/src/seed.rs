//! Demo data factories.
//!
//! Each screen calls these when it is created, so every view instance owns
//! a fresh copy. Timestamps are relative to the `now` passed in; the tip
//! generator is seeded and therefore repeatable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::format::DAY_MS;
use crate::receipt::{PaymentMethod, Privacy, Receipt};
use crate::security::{Device, DeviceId, DeviceKind, SecurityEvent, SecuritySettings, Severity};
use crate::venues::{QuietHours, QuietHoursOverride, RuleMode, Venue, VenueCategory};
use crate::wallet::{TipId, TipItem, TipStatus};

const HOUR_MS: i64 = 3_600_000;

pub fn venues(now: i64) -> Vec<Venue> {
    let days = |d: i64| now - d * DAY_MS;

    let mut corner = Venue::new("v-corner", "Corner Grind", VenueCategory::Cafe, "214 Valencia St", days(1));
    corner.visits = 18;
    corner.favorite = true;
    corner.rule = RuleMode::AlwaysAllow;

    let mut blue_door = Venue::new("v-bluedoor", "Blue Door Salon", VenueCategory::Salon, "88 Hayes St", days(12));
    blue_door.visits = 4;
    blue_door.favorite = true;
    blue_door.rule = RuleMode::AlwaysAllow;
    blue_door.note = "Ask for Maya".to_string();

    let mut skyline = Venue::new("v-skyline", "Skyline Rooftop", VenueCategory::Bar, "1 Market St, 21F", days(3));
    skyline.visits = 6;
    skyline.cap = Some(1);
    skyline.quiet_hours = quiet("23:30", "10:00");

    let mut dash = Venue::new("v-dash", "DashRun Delivery", VenueCategory::Delivery, "Citywide", days(0));
    dash.visits = 27;
    dash.rule = RuleMode::AlwaysDeny;

    let mut trattoria = Venue::new("v-trattoria", "Trattoria Nonna", VenueCategory::Restaurant, "512 Columbus Ave", days(21));
    trattoria.visits = 3;

    let mut glide = Venue::new("v-glide", "Glide Rides", VenueCategory::Rideshare, "Citywide", days(5));
    glide.visits = 11;
    glide.quiet_hours = QuietHoursOverride::Off;

    let mut harbor = Venue::new("v-harbor", "Harbor View Hotel", VenueCategory::Hotel, "300 Embarcadero", days(64));
    harbor.visits = 2;

    let mut noodle = Venue::new("v-noodle", "Noodle Bar 9", VenueCategory::Restaurant, "9 Clement St", days(8));
    noodle.visits = 7;

    let mut press = Venue::new("v-press", "Pressed Juice Co.", VenueCategory::Cafe, "77 Fillmore St", days(30));
    press.visits = 1;
    press.rule = RuleMode::AlwaysDeny;

    let mut fade = Venue::new("v-fade", "Fresh Fade Barbers", VenueCategory::Salon, "1450 Haight St", days(17));
    fade.visits = 5;
    fade.cap = Some(2);

    vec![corner, blue_door, skyline, dash, trattoria, glide, harbor, noodle, press, fade]
}

fn quiet(start: &str, end: &str) -> QuietHoursOverride {
    QuietHours::parse(start, end)
        .map(QuietHoursOverride::Custom)
        .unwrap_or_default()
}

pub fn devices(now: i64) -> Vec<Device> {
    let device = |id: &str, name: &str, kind, os: &str, location: &str, ago: i64, trusted, current| Device {
        id: DeviceId::new(id),
        name: name.to_string(),
        kind,
        os: os.to_string(),
        location: location.to_string(),
        last_active: now - ago,
        trusted,
        current,
    };
    vec![
        device("d-this", "This Mac", DeviceKind::Laptop, "macOS 15", "San Francisco, US", 0, true, true),
        device("d-iphone", "iPhone 16", DeviceKind::Phone, "iOS 18.1", "San Francisco, US", 2 * HOUR_MS, true, false),
        device("d-pixel", "Pixel 8", DeviceKind::Phone, "Android 15", "Oakland, US", 3 * DAY_MS, false, false),
        device("d-work", "Work ThinkPad", DeviceKind::Laptop, "Windows 11", "San Jose, US", 9 * DAY_MS, false, false),
    ]
}

/// Audit trail, newest first.
pub fn security_events(now: i64) -> Vec<SecurityEvent> {
    vec![
        SecurityEvent::new(
            "New sign-in from Pixel 8",
            "Android 15 \u{00B7} Oakland, US",
            now - 3 * DAY_MS,
            Severity::Warn,
        ),
        SecurityEvent::new(
            "Password changed",
            "Changed from This Mac",
            now - 12 * DAY_MS,
            Severity::Info,
        ),
        SecurityEvent::new(
            "Trusted iPhone 16",
            "Sign-ins from this device skip extra verification",
            now - 40 * DAY_MS,
            Severity::Info,
        ),
    ]
}

pub fn security_settings() -> SecuritySettings {
    SecuritySettings {
        two_factor: true,
        passkey: false,
        biometric_lock: true,
        login_alerts: true,
        recovery_email_verified: false,
    }
}

pub fn receipt(now: i64) -> Receipt {
    Receipt {
        number: "RCV-7Q2K-0412".to_string(),
        pro_name: "Maya Chen".to_string(),
        venue: "Blue Door Salon".to_string(),
        subtotal: 85.0,
        tip: 17.0,
        fee: 0.55,
        paid_at: now - 26 * HOUR_MS,
        method: PaymentMethod::new("Visa", "4242"),
        privacy: Privacy::Receipt,
        show_message: true,
        message: "Best cut I've had all year. Thank you, Maya!".to_string(),
        signature: String::new(),
    }
    .signed()
}

const PROS: [&str; 8] = [
    "Maya Chen",
    "Jordan Reyes",
    "Sam Okafor",
    "Priya Nair",
    "Alex Kim",
    "Luca Romano",
    "Nia Brooks",
    "Theo Martin",
];

const VENUES: [&str; 6] = [
    "Corner Grind",
    "Blue Door Salon",
    "Skyline Rooftop",
    "DashRun Delivery",
    "Trattoria Nonna",
    "Glide Rides",
];

const NOTES: [&str; 5] = ["", "Thanks!", "Great service", "Birthday dinner", "Rainy day delivery"];

const METHODS: [(&str, &str); 3] = [("Visa", "4242"), ("Mastercard", "5100"), ("Apple Pay", "0007")];

const RECEIPT_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generate `count` tips spread over the last ~120 days.
pub fn tips(now: i64, count: usize, seed: u64) -> Vec<TipItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let amount = match rng.random_range(0..10) {
                0..=3 => rng.random_range(100..500),
                4..=7 => rng.random_range(500..=2_000),
                _ => rng.random_range(2_001..6_000),
            } as f64
                / 100.0;
            let status = match rng.random_range(0..20) {
                0..=14 => TipStatus::Completed,
                15..=16 => TipStatus::Pending,
                17..=18 => TipStatus::Refunded,
                _ => TipStatus::Failed,
            };
            let code: String = (0..4)
                .map(|_| RECEIPT_ALPHABET[rng.random_range(0..RECEIPT_ALPHABET.len())] as char)
                .collect();
            let (brand, last4) = METHODS[rng.random_range(0..METHODS.len())];
            TipItem {
                id: TipId(format!("tip-{:03}", i)),
                pro_name: PROS[rng.random_range(0..PROS.len())].to_string(),
                venue: VENUES[rng.random_range(0..VENUES.len())].to_string(),
                receipt_number: format!("RCV-{}-{:04}", code, rng.random_range(0..10_000)),
                amount,
                fee: (amount * 0.029 * 100.0).round() / 100.0 + 0.30,
                status,
                note: NOTES[rng.random_range(0..NOTES.len())].to_string(),
                method: PaymentMethod::new(brand, last4),
                at: now - rng.random_range(0..120 * DAY_MS),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::Verification;

    const NOW: i64 = 1_760_000_000_000;

    #[test]
    fn one_current_device() {
        let devices = devices(NOW);
        assert_eq!(devices.iter().filter(|d| d.current).count(), 1);
    }

    #[test]
    fn seed_receipt_verifies() {
        assert_eq!(receipt(NOW).verify(), Verification::Verified);
    }

    #[test]
    fn tips_are_repeatable() {
        assert_eq!(tips(NOW, 20, 7), tips(NOW, 20, 7));
        assert_ne!(tips(NOW, 20, 7), tips(NOW, 20, 8));
    }

    #[test]
    fn tips_within_window() {
        for tip in tips(NOW, 50, 1) {
            assert!(tip.at <= NOW && tip.at > NOW - 120 * DAY_MS);
            assert!(tip.amount >= 1.0 && tip.amount < 60.0);
            assert!(tip.receipt_number.starts_with("RCV-"));
        }
    }

    #[test]
    fn venues_have_unique_ids() {
        let venues = venues(NOW);
        let mut ids: Vec<&str> = venues.iter().map(|v| v.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), venues.len());
    }

    #[test]
    fn seeded_quiet_hours_parse() {
        let venues = venues(NOW);
        let skyline = venues.iter().find(|v| v.id.as_str() == "v-skyline").unwrap();
        assert!(matches!(skyline.quiet_hours, QuietHoursOverride::Custom(_)));
    }
}
