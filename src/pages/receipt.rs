//! Receipt page - the shareable receipt viewer.
//!
//! The tipper can change who sees their message; the card re-evaluates
//! message visibility from the current receipt on every render.

use dioxus::prelude::*;
use tipjar_core::{
    copy_with_fallback, now_ms, seed, share_with_fallback, Privacy, ShareOutcome, SharePayload, Toast,
};
use tipjar_ui::{Button, ButtonVariant, Pills, Switch, TextArea, ToastBanner};

use crate::components::ReceiptCard;
use crate::context::{use_config, use_screen_toast};
use crate::platform::{self, DesktopClipboard};

const MESSAGE_MAX: usize = 200;

fn privacy_hint(privacy: Privacy) -> &'static str {
    match privacy {
        Privacy::Public => "Anyone with the link sees your message",
        Privacy::Receipt => "Shown on the receipt if you choose",
        Privacy::ProOnly => "Only the pro sees your message",
        Privacy::Private => "Nobody else sees your message",
    }
}

#[component]
pub fn ReceiptPage() -> Element {
    let config = use_config();
    let base_url = config.share_base_url.clone();

    let mut receipt = use_signal(|| seed::receipt(now_ms()));
    let mut manual_copy: Signal<Option<String>> = use_signal(|| None);
    let mut toast = use_screen_toast();

    let mut report = move |outcome: ShareOutcome| {
        tracing::debug!(?outcome, "share outcome");
        let message = outcome.message();
        match outcome {
            ShareOutcome::ManualCopy(text) => {
                toast.show(Toast::warn(message));
                manual_copy.set(Some(text));
            }
            ShareOutcome::Shared | ShareOutcome::Copied => {
                toast.show(Toast::success(message));
                manual_copy.set(None);
            }
        }
    };

    let current = receipt();
    let share_url = current.share_url(&base_url);
    let privacy_index = Privacy::ALL.iter().position(|p| *p == current.privacy).unwrap_or(0);

    let copy_url = share_url.clone();
    let payload = SharePayload {
        title: format!("Tip receipt {}", current.number),
        text: current.share_text(&base_url),
        url: share_url.clone(),
    };

    rsx! {
        div { class: "page receipt",
            header { class: "page-head",
                h1 { class: "page-title", "Receipt" }
                p { class: "page-subtitle", "{current.number}" }
            }

            ReceiptCard { receipt: current.clone(), share_url: share_url.clone() }

            div { class: "share-actions",
                Button {
                    onclick: move |_| report(copy_with_fallback(&mut DesktopClipboard, &copy_url)),
                    "Copy link"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        let mut sheet = platform::share_sheet();
                        report(share_with_fallback(&mut sheet, &mut DesktopClipboard, &payload));
                    },
                    "Share"
                }
            }

            if let Some(text) = manual_copy() {
                div { class: "manual-copy",
                    label { class: "input-label", r#for: "manual-link", "Copy this link" }
                    input {
                        id: "manual-link",
                        class: "input-field mono",
                        readonly: true,
                        value: "{text}",
                    }
                }
            }

            section { class: "privacy-panel",
                h2 { class: "section-title", "Message privacy" }
                Pills {
                    options: Privacy::ALL.iter().map(|p| p.label().to_string()).collect::<Vec<_>>(),
                    selected: privacy_index,
                    aria_label: "Message privacy".to_string(),
                    on_select: move |i: usize| {
                        if let Some(privacy) = Privacy::ALL.get(i) {
                            tracing::debug!(?privacy, "receipt privacy changed");
                            receipt.write().privacy = *privacy;
                        }
                    },
                }
                p { class: "privacy-hint", "{privacy_hint(current.privacy)}" }
                Switch {
                    checked: current.show_message,
                    label: "Show message on receipt".to_string(),
                    description: "Applies when privacy is \u{201C}On receipt\u{201D}".to_string(),
                    on_toggle: move |on: bool| receipt.write().show_message = on,
                }
                TextArea {
                    id: "receipt-message".to_string(),
                    label: "Your message".to_string(),
                    value: current.message.clone(),
                    max_len: MESSAGE_MAX,
                    oninput: move |text: String| receipt.write().message = text,
                }
            }

            ToastBanner { toast: toast.current(), on_close: move |_| toast.close() }
        }
    }
}
