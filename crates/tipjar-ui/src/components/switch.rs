//! Toggle switch row.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SwitchProps {
    pub checked: bool,
    pub label: String,
    #[props(default)]
    pub description: Option<String>,
    /// Called with the requested new state
    pub on_toggle: EventHandler<bool>,
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn Switch(props: SwitchProps) -> Element {
    let checked = props.checked;

    rsx! {
        div { class: "switch-row",
            div { class: "switch-text",
                span { class: "switch-label", "{props.label}" }
                if let Some(description) = &props.description {
                    span { class: "switch-description", "{description}" }
                }
            }
            button {
                class: if checked { "switch on" } else { "switch" },
                role: "switch",
                "aria-checked": if checked { "true" } else { "false" },
                "aria-label": "{props.label}",
                disabled: props.disabled,
                onclick: move |_| props.on_toggle.call(!checked),
                span { class: "switch-thumb" }
            }
        }
    }
}
