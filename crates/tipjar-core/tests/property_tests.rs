//! Property-based tests for filters, commands and receipt visibility
//!
//! Uses proptest to check the invariants the screens rely on.

use proptest::prelude::*;
use tipjar_core::{
    resolve_visibility, AmountBucket, BulkAction, BulkTarget, Device, DeviceId, DeviceKind,
    PaymentMethod, Privacy, Receipt, RuleMode, SecurityCenter, SecuritySettings, Venue, VenueBook,
    VenueCategory, VenueId, DAY_MS,
};

const NOW: i64 = 800 * DAY_MS;

// ============================================================================
// Strategy Generators
// ============================================================================

fn privacy_strategy() -> impl Strategy<Value = Privacy> {
    prop_oneof![
        Just(Privacy::Public),
        Just(Privacy::Receipt),
        Just(Privacy::ProOnly),
        Just(Privacy::Private),
    ]
}

fn rule_strategy() -> impl Strategy<Value = RuleMode> {
    prop_oneof![
        Just(RuleMode::FollowGlobal),
        Just(RuleMode::AlwaysAllow),
        Just(RuleMode::AlwaysDeny),
    ]
}

fn target_strategy() -> impl Strategy<Value = BulkTarget> {
    prop_oneof![
        Just(BulkTarget::All),
        Just(BulkTarget::Favorites),
        Just(BulkTarget::Allowed),
        Just(BulkTarget::Denied),
    ]
}

fn action_strategy() -> impl Strategy<Value = BulkAction> {
    prop_oneof![Just(BulkAction::Allow), Just(BulkAction::Deny), Just(BulkAction::Clear)]
}

/// Venues as (favorite, rule, days since visit)
fn venues_strategy() -> impl Strategy<Value = Vec<Venue>> {
    prop::collection::vec((any::<bool>(), rule_strategy(), 0..90i64), 0..25).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (favorite, rule, days))| {
                let mut v = Venue::new(
                    format!("v{}", i),
                    format!("Venue {}", i),
                    VenueCategory::Cafe,
                    "Somewhere",
                    NOW - days * DAY_MS,
                );
                v.favorite = favorite;
                v.rule = rule;
                v
            })
            .collect()
    })
}

fn receipt_with(privacy: Privacy, show_message: bool, message: String) -> Receipt {
    Receipt {
        number: "RCV-PROP-0001".to_string(),
        pro_name: "Pro".to_string(),
        venue: "Venue".to_string(),
        subtotal: 10.0,
        tip: 2.0,
        fee: 0.3,
        paid_at: NOW,
        method: PaymentMethod::new("Visa", "4242"),
        privacy,
        show_message,
        message,
        signature: String::new(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Private and pro-only messages never reach the public view
    #[test]
    fn gated_privacy_always_hidden(
        show in any::<bool>(),
        message in ".{0,80}",
        private in any::<bool>(),
    ) {
        let privacy = if private { Privacy::Private } else { Privacy::ProOnly };
        let r = receipt_with(privacy, show, message);
        prop_assert!(!resolve_visibility(&r).is_visible());
    }

    /// On-receipt visibility is exactly flag AND non-blank message
    #[test]
    fn receipt_privacy_is_flag_and_content(show in any::<bool>(), message in "[ a-z]{0,20}") {
        let expected = show && !message.trim().is_empty();
        let r = receipt_with(Privacy::Receipt, show, message);
        prop_assert_eq!(resolve_visibility(&r).is_visible(), expected);
    }

    /// Visibility is a pure function of its inputs
    #[test]
    fn visibility_is_deterministic(privacy in privacy_strategy(), show in any::<bool>(), message in ".{0,40}") {
        let r = receipt_with(privacy, show, message);
        prop_assert_eq!(resolve_visibility(&r), resolve_visibility(&r));
    }

    /// Amount buckets partition every non-negative amount
    #[test]
    fn amount_buckets_partition(cents in 0u32..1_000_000) {
        let amount = f64::from(cents) / 100.0;
        let hits = [AmountBucket::Under5, AmountBucket::From5To20, AmountBucket::Over20]
            .iter()
            .filter(|b| b.matches(amount))
            .count();
        prop_assert_eq!(hits, 1);
        prop_assert!(AmountBucket::All.matches(amount));
    }

    /// Favoriting under FollowGlobal upgrades; unfavoriting never changes the rule
    #[test]
    fn favorite_toggle_rule(venues in venues_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!venues.is_empty());
        let target = venues[pick.index(venues.len())].clone();
        let mut book = VenueBook::new(venues);

        let now_favorite = book.toggle_favorite(&target.id).unwrap();
        let after = book.get(&target.id).unwrap().rule;
        if now_favorite && target.rule == RuleMode::FollowGlobal {
            prop_assert_eq!(after, RuleMode::AlwaysAllow);
        } else {
            prop_assert_eq!(after, target.rule);
        }
    }

    /// Bulk actions touch exactly the target group
    #[test]
    fn bulk_touches_only_target(
        venues in venues_strategy(),
        target in target_strategy(),
        action in action_strategy(),
    ) {
        let before = venues.clone();
        let mut book = VenueBook::new(venues);
        let changed = book.apply_bulk(target, action);

        prop_assert_eq!(changed, before.iter().filter(|v| target.matches(v)).count());
        for (old, new) in before.iter().zip(book.venues()) {
            prop_assert_eq!(&old.id, &new.id);
            prop_assert_eq!(old.favorite, new.favorite);
            if target.matches(old) {
                prop_assert_eq!(new.rule, action.rule());
            } else {
                prop_assert_eq!(new.rule, old.rule);
            }
        }
    }

    /// Revoking never removes the current device, and logs exactly once on success
    #[test]
    fn revoke_respects_current(trusted in prop::collection::vec(any::<bool>(), 1..8), pick in any::<prop::sample::Index>()) {
        let devices: Vec<Device> = trusted
            .iter()
            .enumerate()
            .map(|(i, &t)| Device {
                id: DeviceId::new(format!("d{}", i)),
                name: format!("Device {}", i),
                kind: DeviceKind::Phone,
                os: "iOS".to_string(),
                location: "Here".to_string(),
                last_active: NOW,
                trusted: t,
                current: i == 0,
            })
            .collect();
        let idx = pick.index(devices.len());
        let id = devices[idx].id.clone();
        let mut center = SecurityCenter::new(devices.clone(), vec![], SecuritySettings::default());

        let result = center.revoke_device(&id, NOW);
        if idx == 0 {
            prop_assert!(result.is_err());
            prop_assert_eq!(center.devices().len(), devices.len());
            prop_assert_eq!(center.events().count(), 0);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(center.devices().len(), devices.len() - 1);
            prop_assert_eq!(center.events().count(), 1);
        }
        prop_assert!(center.devices().iter().any(|d| d.current));

        center.revoke_all_others(NOW);
        prop_assert_eq!(center.devices().len(), 1);
        prop_assert!(center.devices()[0].current);
    }

    /// Unknown ids leave the book unchanged
    #[test]
    fn unknown_id_is_noop(venues in venues_strategy(), rule in rule_strategy()) {
        let mut book = VenueBook::new(venues.clone());
        prop_assert!(book.set_rule(&VenueId::new("missing"), rule).is_err());
        prop_assert_eq!(book.venues(), venues.as_slice());
    }
}
