//! Toast banner
//!
//! Renders the current toast of a screen; state and auto-dismiss timing
//! live in [`crate::ToastHandle`].

use dioxus::prelude::*;
use tipjar_core::Toast;

#[component]
pub fn ToastBanner(toast: Option<Toast>, on_close: EventHandler<()>) -> Element {
    let Some(toast) = toast else {
        return rsx! {};
    };
    let tone_class = toast.tone.class();

    rsx! {
        div {
            class: "toast {tone_class}",
            role: "status",
            "aria-live": "polite",
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-close",
                "aria-label": "Dismiss",
                onclick: move |_| on_close.call(()),
                "\u{00D7}"
            }
        }
    }
}

/// Inline error banner with an optional retry action.
#[component]
pub fn ErrorBanner(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert",
            span { "{message}" }
            div { class: "error-actions",
                if let Some(retry) = on_retry {
                    button {
                        class: "error-retry",
                        onclick: move |_| retry.call(()),
                        "Retry"
                    }
                }
                button {
                    class: "error-dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "Dismiss"
                }
            }
        }
    }
}

/// Empty list placeholder
#[component]
pub fn EmptyState(title: String, #[props(default)] hint: Option<String>) -> Element {
    rsx! {
        div { class: "empty-state",
            p { class: "empty-title", "{title}" }
            if let Some(hint) = hint {
                p { class: "empty-hint", "{hint}" }
            }
        }
    }
}
