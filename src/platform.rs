//! Desktop implementations of the optional platform capabilities.

use tipjar_core::{Capability, Clipboard, NoShareSheet};

/// System clipboard through `arboard`.
///
/// Opening the clipboard can fail (headless sessions, Wayland without a
/// data-control protocol); that is reported as [`Capability::Unavailable`].
#[derive(Debug, Default)]
pub struct DesktopClipboard;

impl Clipboard for DesktopClipboard {
    fn write_text(&mut self, text: &str) -> Capability {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(text) {
                Ok(()) => Capability::Delivered,
                Err(e) => {
                    tracing::warn!("clipboard write failed: {}", e);
                    Capability::Unavailable(e.to_string())
                }
            },
            Err(e) => {
                tracing::warn!("clipboard unavailable: {}", e);
                Capability::Unavailable(e.to_string())
            }
        }
    }
}

/// Desktop webviews have no native share sheet.
pub fn share_sheet() -> NoShareSheet {
    NoShareSheet
}
