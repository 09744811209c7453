//! Tipjar UI Components
//!
//! Dioxus building blocks shared by the four Tipjar screens: buttons, pill
//! selectors, inputs, switches, sheets, toasts and score meters.
//!
//! Screen-specific panels live in the desktop crate; everything here is
//! presentational and takes its state through props.

pub mod components;
pub mod schedule;

pub use components::*;
pub use schedule::{use_scheduler, use_toast, Scheduler, ToastHandle};
