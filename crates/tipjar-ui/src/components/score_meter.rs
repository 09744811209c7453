//! Score meter and stat tiles.

use dioxus::prelude::*;
use tipjar_core::Score;

/// Horizontal meter for a 0-100 score
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ScoreMeter {
///         score: center.read().score(),
///         title: "Security score".to_string(),
///         label: security_label(&score).to_string(),
///     }
/// }
/// ```
#[component]
pub fn ScoreMeter(
    score: Score,
    title: String,
    /// Band label, e.g. "Strong"
    label: String,
    #[props(default)] caption: Option<String>,
) -> Element {
    let tone = score.band.tone();
    let value = score.value;

    rsx! {
        section { class: "score-meter score-{tone}",
            div { class: "score-head",
                span { class: "score-title", "{title}" }
                span { class: "score-value", "{value}%" }
            }
            div {
                class: "score-track",
                role: "meter",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{value}",
                div { class: "score-fill", style: "width: {value}%;" }
            }
            div { class: "score-foot",
                span { class: "score-label", "{label}" }
                if let Some(caption) = caption {
                    span { class: "score-caption", "{caption}" }
                }
            }
        }
    }
}

/// Small labelled figure for summary rows
#[component]
pub fn StatTile(
    label: String,
    value: String,
    /// Extra class, e.g. "warn"
    #[props(default)]
    tone: String,
) -> Element {
    let class = crate::class_list("stat-tile", Some(&tone));

    rsx! {
        div { class: "{class}",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
