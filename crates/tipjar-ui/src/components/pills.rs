//! Pill selectors
//!
//! A horizontal single-choice row used for tabs, date presets, status and
//! amount filters. Options are plain labels; the parent maps the selected
//! index back onto its own enum.

use dioxus::prelude::*;

/// Properties for the Pills component
#[derive(Clone, PartialEq, Props)]
pub struct PillsProps {
    /// Option labels in display order
    pub options: Vec<String>,
    /// Index of the selected option
    pub selected: usize,
    pub on_select: EventHandler<usize>,
    /// Accessible group name
    #[props(default = "Filter".to_string())]
    pub aria_label: String,
    /// Optional count badge per option (same length as `options`)
    #[props(default)]
    pub counts: Option<Vec<usize>>,
}

/// Displays a row of selectable pills
///
/// # Example
///
/// ```rust,ignore
/// let mut range = use_signal(|| 3usize);
///
/// rsx! {
///     Pills {
///         options: DateRange::ALL.iter().map(|r| r.label().to_string()).collect(),
///         selected: range(),
///         on_select: move |i| range.set(i),
///     }
/// }
/// ```
#[component]
pub fn Pills(props: PillsProps) -> Element {
    rsx! {
        div {
            class: "pills",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for (index, label) in props.options.iter().enumerate() {
                {
                    let is_selected = index == props.selected;
                    let on_select = props.on_select;
                    let count = props.counts.as_ref().and_then(|c| c.get(index).copied());
                    rsx! {
                        button {
                            key: "{index}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(index),
                            "{label}"
                            if let Some(count) = count {
                                span { class: "pill-count", "{count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Labels for an "All" option followed by `labels`.
///
/// Index 0 is "All"; index `i + 1` is `labels[i]`.
pub fn with_all(all: &str, labels: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    std::iter::once(all.to_string())
        .chain(labels.into_iter().map(Into::into))
        .collect()
}

/// Map a pill index from [`with_all`] back onto an optional choice.
pub fn pick_optional<T: Copy>(choices: &[T], index: usize) -> Option<T> {
    index.checked_sub(1).and_then(|i| choices.get(i).copied())
}

/// Inverse of [`pick_optional`].
pub fn optional_index<T: PartialEq>(choices: &[T], value: Option<&T>) -> usize {
    value
        .and_then(|v| choices.iter().position(|c| c == v))
        .map_or(0, |i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_all_prepends() {
        let labels = with_all("All", ["Pending", "Failed"]);
        assert_eq!(labels, vec!["All", "Pending", "Failed"]);
    }

    #[test]
    fn pick_optional_maps_indices() {
        let choices = ['a', 'b'];
        assert_eq!(pick_optional(&choices, 0), None);
        assert_eq!(pick_optional(&choices, 1), Some('a'));
        assert_eq!(pick_optional(&choices, 2), Some('b'));
        assert_eq!(pick_optional(&choices, 9), None);
    }

    #[test]
    fn optional_index_round_trips() {
        let choices = ['a', 'b'];
        assert_eq!(optional_index(&choices, None), 0);
        assert_eq!(optional_index(&choices, Some(&'b')), 2);
        assert_eq!(pick_optional(&choices, optional_index(&choices, Some(&'a'))), Some('a'));
    }
}
