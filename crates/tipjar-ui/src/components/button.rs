//! Buttons shared by the screens.
//!
//! [`ButtonVariant`] maps to a `btn-*` class. Primary is the panel's main
//! action, Danger is for revoke/sign-out, and Chip sits inside rows and
//! filter bars.

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
    Chip,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Chip => "btn-chip",
        }
    }
}

/// Join a base class with optional extra classes.
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.trim().is_empty() => format!("{} {}", base, extra.trim()),
        _ => base.to_string(),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Waiting on an async call: spinner shown, clicks ignored
    #[props(default = false)]
    pub busy: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Text button; `busy` and `disabled` both block the handler.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Danger,
///         busy: revoking(),
///         onclick: move |_| revoke_all(),
///         "Sign out all other sessions"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());
    let blocked = props.disabled || props.busy;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: blocked,
            "aria-busy": if props.busy { "true" } else { "false" },
            onclick: move |_| match &props.onclick {
                Some(handler) if !blocked => handler.call(()),
                _ => {}
            },
            if props.busy {
                span { class: "btn-spinner", "\u{25CC}" }
            }
            {props.children}
        }
    }
}

/// Round glyph button. `pressed` turns it into a toggle (`aria-pressed`).
#[component]
pub fn IconButton(
    children: Element,
    onclick: EventHandler<()>,
    aria_label: String,
    #[props(default)] pressed: Option<bool>,
    #[props(default)] class: Option<String>,
) -> Element {
    let full_class = class_list("icon-btn", class.as_deref());
    let aria_pressed = pressed.map(|on| if on { "true" } else { "false" });

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: "{aria_label}",
            "aria-label": "{aria_label}",
            "aria-pressed": aria_pressed,
            onclick: move |_| onclick.call(()),
            {children}
        }
    }
}
