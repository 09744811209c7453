//! Detail drawer for a single tip, with its stubbed actions.

use dioxus::prelude::*;
use tipjar_core::{date_time, mask, money, TipAction, TipItem};
use tipjar_ui::{Button, ButtonVariant, Sheet, SheetSide};

#[component]
pub fn TipDrawer(
    item: TipItem,
    /// Action currently waiting on the mock backend
    pending: Option<TipAction>,
    on_action: EventHandler<TipAction>,
    on_close: EventHandler<()>,
) -> Element {
    let total = money(item.amount + item.fee);

    rsx! {
        Sheet {
            open: true,
            side: SheetSide::Right,
            title: format!("Tip to {}", item.pro_name),
            subtitle: item.venue.clone(),
            on_close: move |_| on_close.call(()),
            footer: rsx! {
                for action in TipAction::ALL {
                    if action.is_available(&item) {
                        Button {
                            key: "{action.label()}",
                            variant: if action == TipAction::Report { ButtonVariant::Danger } else { ButtonVariant::Ghost },
                            busy: pending == Some(action),
                            disabled: pending.is_some() && pending != Some(action),
                            onclick: move |_| on_action.call(action),
                            "{action.label()}"
                        }
                    }
                }
            },

            dl { class: "receipt-lines",
                div { class: "receipt-line",
                    dt { "Status" }
                    dd { span { class: "status-chip {item.status.class()}", "{item.status.label()}" } }
                }
                div { class: "receipt-line tip",
                    dt { "Tip" }
                    dd { "{money(item.amount)}" }
                }
                div { class: "receipt-line",
                    dt { "Fee" }
                    dd { "{money(item.fee)}" }
                }
                div { class: "receipt-line total",
                    dt { "Charged" }
                    dd { "{total}" }
                }
                div { class: "receipt-line",
                    dt { "When" }
                    dd { "{date_time(item.at)}" }
                }
                div { class: "receipt-line",
                    dt { "Paid with" }
                    dd { "{item.method}" }
                }
                div { class: "receipt-line",
                    dt { "Receipt" }
                    dd { class: "mono", title: "{item.receipt_number}", "{mask(&item.receipt_number)}" }
                }
            }
            if !item.note.is_empty() {
                p { class: "tip-note", "\u{201C}{item.note}\u{201D}" }
            }
        }
    }
}
