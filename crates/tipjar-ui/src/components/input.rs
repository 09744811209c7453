//! Form fields: single-line input, length-capped textarea, search box.
//!
//! Times for custom quiet hours come in through `Input` with
//! `input_type: "time"`, so values arrive as `HH:MM` strings.

use dioxus::prelude::*;

/// First `max` characters of `value` (by `char`, not byte).
pub fn clamp_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[component]
fn FieldLabel(id: String, text: String, hint: Option<String>) -> Element {
    rsx! {
        label { class: "input-label", r#for: "{id}",
            "{text}"
            if let Some(hint) = hint {
                span { class: "input-hint", " ({hint})" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Shown after the label in parentheses
    #[props(default)]
    pub hint: Option<String>,
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub disabled: bool,
    /// Needed for the label's `for`
    #[props(default)]
    pub id: Option<String>,
    /// Validation message; marks the field invalid
    #[props(default)]
    pub error: Option<String>,
}

/// Labelled text input.
///
/// ```rust,ignore
/// Input {
///     id: "quiet-start".to_string(),
///     label: "From".to_string(),
///     input_type: "time".to_string(),
///     value: draft().quiet_start,
///     oninput: move |s: String| draft.write().quiet_start = s,
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.id.clone().unwrap_or_default();
    let error_id = format!("{}-error", id);
    let invalid = props.error.is_some();

    rsx! {
        div { class: "form-field",
            if let Some(text) = props.label.clone() {
                FieldLabel { id: id.clone(), text, hint: props.hint.clone() }
            }
            input {
                id: "{id}",
                class: if invalid { "input-field invalid" } else { "input-field" },
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.clone().unwrap_or_default(),
                disabled: props.disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                "aria-describedby": invalid.then(|| error_id.clone()),
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                p { id: "{error_id}", class: "input-error", role: "alert", "{error}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = 3)]
    pub rows: u32,
    /// Input past this many characters is dropped; adds a `used/max` counter
    #[props(default)]
    pub max_len: Option<usize>,
    #[props(default)]
    pub id: Option<String>,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props.id.clone().unwrap_or_default();
    let counter = props
        .max_len
        .map(|max| format!("{}/{}", props.value.chars().count(), max));
    let max_len = props.max_len;

    rsx! {
        div { class: "form-field",
            if let Some(text) = props.label.clone() {
                FieldLabel { id: id.clone(), text }
            }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.clone().unwrap_or_default(),
                value: "{props.value}",
                oninput: move |e| {
                    let value = e.value();
                    let value = match max_len {
                        Some(max) => clamp_chars(&value, max),
                        None => value,
                    };
                    props.oninput.call(value);
                },
            }
            if let Some(counter) = counter {
                span { class: "input-counter", "aria-live": "polite", "{counter}" }
            }
        }
    }
}

/// Search box; the clear button only shows once there is a query.
#[component]
pub fn SearchInput(
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "Search".to_string())] placeholder: String,
) -> Element {
    rsx! {
        div { class: "search-input-wrapper", role: "search",
            span { class: "search-icon", "aria-hidden": "true", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                "aria-label": "{placeholder}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
            if !value.is_empty() {
                button {
                    class: "search-clear",
                    r#type: "button",
                    "aria-label": "Clear search",
                    onclick: move |_| oninput.call(String::new()),
                    "\u{00D7}"
                }
            }
        }
    }
}
