//! One line of tip history.

use dioxus::prelude::*;
use tipjar_core::{money, relative_time, TipId, TipItem};

#[component]
pub fn TipRow(item: TipItem, now: i64, on_open: EventHandler<TipId>) -> Element {
    let id = item.id.clone();
    let when = relative_time(now, item.at);

    rsx! {
        button {
            class: "tip-row",
            onclick: move |_| on_open.call(id.clone()),
            div { class: "tip-main",
                span { class: "tip-pro", "{item.pro_name}" }
                span { class: "tip-meta", "{item.venue} \u{00B7} {when}" }
            }
            div { class: "tip-side",
                span { class: "tip-amount", "{money(item.amount)}" }
                span { class: "status-chip {item.status.class()}", "{item.status.label()}" }
            }
        }
    }
}
