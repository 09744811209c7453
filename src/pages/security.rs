//! Security page - sessions, protection settings and activity.

use dioxus::prelude::*;
use tipjar_core::{
    now_ms, security_label, seed, DeviceId, SecurityCenter, SecurityCommand, SecuritySetting,
    Severity, Toast,
};
use tipjar_ui::{Button, ButtonVariant, ScoreMeter, StatTile, Switch, ToastBanner};

use crate::components::{DeviceCard, EventLog};
use crate::context::{use_network, use_screen_toast};

fn setting_hint(setting: SecuritySetting) -> &'static str {
    match setting {
        SecuritySetting::TwoFactor => "Codes from an authenticator app",
        SecuritySetting::Passkey => "Sign in without a password",
        SecuritySetting::BiometricLock => "Face or fingerprint to open the app",
        SecuritySetting::LoginAlerts => "Email me about new sign-ins",
        SecuritySetting::RecoveryEmail => "Verified address for account recovery",
    }
}

#[component]
pub fn Security() -> Element {
    let network = use_network();

    let mut center = use_signal(|| {
        let now = now_ms();
        SecurityCenter::new(
            seed::devices(now),
            seed::security_events(now),
            seed::security_settings(),
        )
    });
    let mut level: Signal<Option<Severity>> = use_signal(|| None);
    let mut revoking = use_signal(|| false);
    let mut toast = use_screen_toast();

    let mut dispatch = move |command: SecurityCommand| {
        match center.write().apply(command, now_ms()) {
            Ok(t) => toast.show(t),
            Err(e) => toast.show(Toast::from(&e)),
        }
    };

    let on_revoke_all = move |_: ()| {
        if revoking() {
            return;
        }
        revoking.set(true);
        let network = network.clone();
        spawn(async move {
            match network.call("sign out other sessions").await {
                Ok(()) => dispatch(SecurityCommand::RevokeAllOthers),
                Err(e) => toast.show(Toast::from(&e)),
            }
            revoking.set(false);
        });
    };

    let now = now_ms();
    let view = center.read().view(level());
    let settings = *center.read().settings();
    let others = view.devices.iter().filter(|d| !d.current).count();

    rsx! {
        div { class: "page security",
            header { class: "page-head",
                h1 { class: "page-title", "Security" }
                p { class: "page-subtitle", "Devices signed in to your account" }
            }

            ScoreMeter {
                score: view.score,
                title: "Security score".to_string(),
                label: security_label(&view.score).to_string(),
            }

            div { class: "stat-row",
                StatTile { label: "Trusted".to_string(), value: view.trusted.to_string() }
                StatTile {
                    label: "Unverified".to_string(),
                    value: view.untrusted.to_string(),
                    tone: if view.untrusted > 0 { "warn".to_string() } else { String::new() },
                }
            }

            section { class: "device-list",
                div { class: "section-head",
                    h2 { class: "section-title", "Sessions" }
                    Button {
                        variant: ButtonVariant::Danger,
                        busy: revoking(),
                        disabled: others == 0,
                        onclick: on_revoke_all,
                        if revoking() { "Signing out\u{2026}" } else { "Sign out all other sessions" }
                    }
                }
                for device in view.devices.iter() {
                    DeviceCard {
                        key: "{device.id}",
                        device: device.clone(),
                        now,
                        on_trust: move |(id, trusted): (DeviceId, bool)| {
                            dispatch(SecurityCommand::SetTrust { id, trusted })
                        },
                        on_revoke: move |id: DeviceId| dispatch(SecurityCommand::Revoke(id)),
                    }
                }
            }

            section { class: "settings-list",
                h2 { class: "section-title", "Protection" }
                for setting in SecuritySetting::ALL {
                    Switch {
                        key: "{setting.label()}",
                        checked: settings.get(setting),
                        label: setting.label().to_string(),
                        description: setting_hint(setting).to_string(),
                        on_toggle: move |_| dispatch(SecurityCommand::ToggleSetting(setting)),
                    }
                }
            }

            EventLog {
                events: view.events.clone(),
                now,
                level: level(),
                on_level: move |l: Option<Severity>| level.set(l),
            }

            ToastBanner { toast: toast.current(), on_close: move |_| toast.close() }
        }
    }
}
