//! Transient feedback messages.
//!
//! A screen shows at most one toast at a time. Each [`ToastCenter::show`]
//! hands back a [`ToastTicket`]; a delayed dismissal only clears the toast
//! if the ticket is still the current one, so a timer left over from an
//! earlier toast cannot hide a newer one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToastTone {
    #[default]
    Info,
    Success,
    Warn,
    Error,
}

impl ToastTone {
    pub fn class(&self) -> &'static str {
        match self {
            ToastTone::Info => "toast-info",
            ToastTone::Success => "toast-success",
            ToastTone::Warn => "toast-warn",
            ToastTone::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub tone: ToastTone,
}

impl Toast {
    pub fn new(message: impl Into<String>, tone: ToastTone) -> Self {
        Self {
            message: message.into(),
            tone,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastTone::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastTone::Success)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(message, ToastTone::Warn)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastTone::Error)
    }
}

impl<E: std::error::Error> From<&E> for Toast {
    fn from(err: &E) -> Self {
        Toast::error(err.to_string())
    }
}

/// Identifies one `show` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastTicket(u64);

/// Single-slot toast holder for one screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastCenter {
    current: Option<Toast>,
    generation: u64,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any visible toast with `toast`.
    pub fn show(&mut self, toast: Toast) -> ToastTicket {
        self.generation += 1;
        self.current = Some(toast);
        ToastTicket(self.generation)
    }

    /// Clear the toast if `ticket` is still current. Returns whether it did.
    pub fn dismiss(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Clear unconditionally (close button).
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_dismiss() {
        let mut center = ToastCenter::new();
        let ticket = center.show(Toast::success("Saved"));
        assert_eq!(center.current().map(|t| t.message.as_str()), Some("Saved"));
        assert!(center.dismiss(ticket));
        assert!(center.current().is_none());
        assert!(!center.dismiss(ticket));
    }

    #[test]
    fn stale_ticket_is_noop() {
        let mut center = ToastCenter::new();
        let first = center.show(Toast::info("first"));
        let _second = center.show(Toast::info("second"));
        assert!(!center.dismiss(first));
        assert_eq!(center.current().map(|t| t.message.as_str()), Some("second"));
    }

    #[test]
    fn tone_classes() {
        assert_eq!(ToastTone::Error.class(), "toast-error");
        assert_eq!(Toast::warn("x").tone, ToastTone::Warn);
    }

    #[test]
    fn error_into_toast() {
        let err = crate::TipError::DeviceNotFound("d9".to_string());
        let toast = Toast::from(&err);
        assert_eq!(toast.tone, ToastTone::Error);
        assert!(toast.message.contains("d9"));
    }
}
