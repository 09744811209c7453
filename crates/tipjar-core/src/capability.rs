//! Optional platform capabilities (clipboard, native share).
//!
//! Implementations never fail loudly: anything that goes wrong is reported
//! as [`Capability::Unavailable`] and the `*_with_fallback` helpers turn it
//! into a manual-copy affordance.

/// Result of asking the platform to do something optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Delivered,
    Unavailable(String),
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Capability;
}

/// What a share sheet receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

pub trait ShareSheet {
    fn share(&mut self, payload: &SharePayload) -> Capability;
}

/// Platform without a native share sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShareSheet;

impl ShareSheet for NoShareSheet {
    fn share(&mut self, _payload: &SharePayload) -> Capability {
        Capability::Unavailable("share sheet not supported on this platform".to_string())
    }
}

/// Platform without clipboard access.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Capability {
        Capability::Unavailable("clipboard not available".to_string())
    }
}

/// How a copy/share request ended, for the UI to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    /// Show the text in a selectable field so the user can copy it by hand
    ManualCopy(String),
}

impl ShareOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ShareOutcome::Shared => "Shared",
            ShareOutcome::Copied => "Link copied",
            ShareOutcome::ManualCopy(_) => "Copy the link below",
        }
    }
}

pub fn copy_with_fallback(clipboard: &mut dyn Clipboard, text: &str) -> ShareOutcome {
    match clipboard.write_text(text) {
        Capability::Delivered => ShareOutcome::Copied,
        Capability::Unavailable(reason) => {
            tracing::debug!("clipboard unavailable: {}", reason);
            ShareOutcome::ManualCopy(text.to_string())
        }
    }
}

/// Try the share sheet, then the clipboard, then manual copy of the URL.
pub fn share_with_fallback(
    sheet: &mut dyn ShareSheet,
    clipboard: &mut dyn Clipboard,
    payload: &SharePayload,
) -> ShareOutcome {
    match sheet.share(payload) {
        Capability::Delivered => ShareOutcome::Shared,
        Capability::Unavailable(reason) => {
            tracing::debug!("share sheet unavailable: {}", reason);
            copy_with_fallback(clipboard, &payload.url)
        }
    }
}
