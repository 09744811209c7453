//! Device session card
//!
//! The current device has no revoke button; the store rejects revoking it
//! as well.

use dioxus::prelude::*;
use tipjar_core::{relative_time, Device, DeviceId, DeviceKind};
use tipjar_ui::{Button, ButtonVariant, Switch};

fn kind_icon(kind: DeviceKind) -> &'static str {
    match kind {
        DeviceKind::Phone => "\u{1F4F1}",
        DeviceKind::Laptop => "\u{1F4BB}",
    }
}

#[component]
pub fn DeviceCard(
    device: Device,
    now: i64,
    on_trust: EventHandler<(DeviceId, bool)>,
    on_revoke: EventHandler<DeviceId>,
) -> Element {
    let active = if device.current {
        "Active now".to_string()
    } else {
        relative_time(now, device.last_active)
    };
    let card_class = match (device.current, device.trusted) {
        (true, _) => "device-card current",
        (false, true) => "device-card",
        (false, false) => "device-card untrusted",
    };
    let trust_id = device.id.clone();
    let revoke_id = device.id.clone();

    rsx! {
        article { class: "{card_class}",
            div { class: "device-head",
                span { class: "device-icon", "{kind_icon(device.kind)}" }
                div { class: "device-titles",
                    span { class: "device-name", "{device.name}" }
                    span { class: "device-meta", "{device.os} \u{00B7} {device.location} \u{00B7} {active}" }
                }
                if device.current {
                    span { class: "badge badge-current", "This device" }
                } else if !device.trusted {
                    span { class: "badge badge-warn", "Unverified" }
                }
            }
            Switch {
                checked: device.trusted,
                label: "Trusted".to_string(),
                description: if device.trusted { "Skips extra verification".to_string() } else { "Asks for a code on sign-in".to_string() },
                disabled: device.current,
                on_toggle: move |trusted: bool| on_trust.call((trust_id.clone(), trusted)),
            }
            if !device.current {
                div { class: "device-actions",
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_revoke.call(revoke_id.clone()),
                        "Sign out"
                    }
                }
            }
        }
    }
}
