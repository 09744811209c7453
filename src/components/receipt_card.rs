//! Receipt card with the privacy-gated message and share QR code.

use base64::Engine;
use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;
use tipjar_core::{date_time, mask, money, resolve_visibility, MessageVisibility, Receipt, Verification};

use crate::theme::colors;

/// Encode `data` as a QR code SVG wrapped in a data URI usable as an img src.
pub fn qr_data_url(data: &str, size: u32) -> Option<String> {
    match QrCode::new(data.as_bytes()) {
        Ok(code) => {
            let svg_string = code
                .render()
                .min_dimensions(size, size)
                .dark_color(svg::Color(colors::INK))
                .light_color(svg::Color(colors::PAPER))
                .build();
            let encoded = base64::engine::general_purpose::STANDARD.encode(svg_string.as_bytes());
            Some(format!("data:image/svg+xml;base64,{}", encoded))
        }
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            None
        }
    }
}

fn verification_class(verification: Verification) -> &'static str {
    match verification {
        Verification::Verified => "badge badge-good",
        Verification::Mismatch => "badge badge-warn",
        Verification::Unsigned => "badge",
    }
}

#[component]
pub fn ReceiptCard(receipt: Receipt, share_url: String) -> Element {
    let qr_url = qr_data_url(&share_url, 160);

    // recomputed every render; privacy or flag changes apply immediately
    let (message, hidden) = match resolve_visibility(&receipt) {
        MessageVisibility::Visible(text) => (Some(text.to_string()), None),
        MessageVisibility::Hidden(reason) => (None, Some(reason.label())),
    };
    let verification = receipt.verify();
    let tip_line = match receipt.tip_percent() {
        Some(pct) => format!("Tip ({}%)", pct),
        None => "Tip".to_string(),
    };

    rsx! {
        article { class: "receipt-card",
            header { class: "receipt-head",
                span { class: "receipt-venue", "{receipt.venue}" }
                span { class: "receipt-pro", "for {receipt.pro_name}" }
                span { class: "receipt-total", "{money(receipt.total())}" }
                span { class: "receipt-date", "{date_time(receipt.paid_at)}" }
            }

            dl { class: "receipt-lines",
                div { class: "receipt-line",
                    dt { "Subtotal" }
                    dd { "{money(receipt.subtotal)}" }
                }
                div { class: "receipt-line tip",
                    dt { "{tip_line}" }
                    dd { "{money(receipt.tip)}" }
                }
                div { class: "receipt-line",
                    dt { "Service fee" }
                    dd { "{money(receipt.fee)}" }
                }
                div { class: "receipt-line total",
                    dt { "Total" }
                    dd { "{money(receipt.total())}" }
                }
                div { class: "receipt-line",
                    dt { "Paid with" }
                    dd { "{receipt.method}" }
                }
                div { class: "receipt-line",
                    dt { "Receipt" }
                    dd { class: "mono", title: "{receipt.number}", "{mask(&receipt.number)}" }
                }
            }

            section { class: "receipt-message",
                if let Some(text) = message {
                    blockquote { class: "message-visible", "\u{201C}{text}\u{201D}" }
                } else if let Some(reason) = hidden {
                    p { class: "message-hidden", "{reason}" }
                }
            }

            footer { class: "receipt-foot",
                div { class: "receipt-verify",
                    span { class: "{verification_class(verification)}", "{verification.label()}" }
                    span { class: "mono signature", "{receipt.short_signature()}" }
                }
                if let Some(src) = qr_url {
                    img {
                        class: "receipt-qr",
                        src: "{src}",
                        alt: "QR code for {share_url}",
                    }
                } else {
                    div { class: "qr-error", "Failed to generate QR code" }
                }
            }
        }
    }
}
