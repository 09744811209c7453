//! Sheet and drawer overlays
//!
//! A bottom sheet (edit rule, bulk apply) or a side drawer (tip details).
//! Clicking the backdrop or the close button calls `on_close`; clicks
//! inside the panel do not propagate to the backdrop.

use dioxus::prelude::*;

use super::IconButton;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SheetSide {
    #[default]
    Bottom,
    Right,
}

impl SheetSide {
    pub fn class(&self) -> &'static str {
        match self {
            SheetSide::Bottom => "sheet sheet-bottom",
            SheetSide::Right => "sheet sheet-right",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SheetProps {
    pub open: bool,
    pub title: String,
    #[props(default)]
    pub subtitle: Option<String>,
    #[props(default)]
    pub side: SheetSide,
    pub on_close: EventHandler<()>,
    pub children: Element,
    /// Optional footer row (actions)
    #[props(default)]
    pub footer: Option<Element>,
}

#[component]
pub fn Sheet(props: SheetProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;
    let panel_class = props.side.class();

    rsx! {
        div {
            class: "sheet-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{props.title}",
                onclick: move |e| e.stop_propagation(),
                header { class: "sheet-header",
                    div { class: "sheet-titles",
                        h2 { class: "sheet-title", "{props.title}" }
                        if let Some(subtitle) = &props.subtitle {
                            p { class: "sheet-subtitle", "{subtitle}" }
                        }
                    }
                    IconButton {
                        onclick: move |_| on_close.call(()),
                        aria_label: "Close".to_string(),
                        class: "close-btn".to_string(),
                        "\u{00D7}"
                    }
                }
                div { class: "sheet-body", {props.children} }
                if let Some(footer) = props.footer {
                    footer { class: "sheet-footer", {footer} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_side_classes() {
        assert_eq!(SheetSide::default(), SheetSide::Bottom);
        assert_eq!(SheetSide::Right.class(), "sheet sheet-right");
    }
}
