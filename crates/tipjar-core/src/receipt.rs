//! Shareable receipt.
//!
//! The message a tipper attaches is gated by the receipt's [`Privacy`]
//! setting; [`resolve_visibility`] is the single place that decides whether
//! it reaches the public view. Receipts carry a BLAKE3 signature over their
//! payment fields so a shared link can be checked with [`Receipt::verify`].

use serde::{Deserialize, Serialize};

use crate::format::money;

/// Who may read the tipper's message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Privacy {
    /// Anyone with the link
    Public,
    /// Shown on the receipt when the show-flag is set
    #[default]
    Receipt,
    /// Only the pro who received the tip
    ProOnly,
    /// Nobody but the tipper
    Private,
}

impl Privacy {
    pub const ALL: [Privacy; 4] = [Privacy::Public, Privacy::Receipt, Privacy::ProOnly, Privacy::Private];

    pub fn label(&self) -> &'static str {
        match self {
            Privacy::Public => "Public",
            Privacy::Receipt => "On receipt",
            Privacy::ProOnly => "Pro only",
            Privacy::Private => "Private",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub brand: String,
    pub last4: String,
}

impl PaymentMethod {
    pub fn new(brand: impl Into<String>, last4: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            last4: last4.into(),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \u{2022}\u{2022}\u{2022}\u{2022} {}", self.brand, self.last4)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// e.g. `RCV-7Q2K-0412`
    pub number: String,
    pub pro_name: String,
    pub venue: String,
    pub subtotal: f64,
    pub tip: f64,
    pub fee: f64,
    /// Unix ms
    pub paid_at: i64,
    pub method: PaymentMethod,
    pub privacy: Privacy,
    pub show_message: bool,
    pub message: String,
    /// Hex BLAKE3 digest of [`Receipt::canonical`]
    pub signature: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenReason {
    Private,
    ProOnly,
    NotOnReceipt,
    Empty,
}

impl HiddenReason {
    pub fn label(&self) -> &'static str {
        match self {
            HiddenReason::Private => "The tipper kept this message private",
            HiddenReason::ProOnly => "This message is only visible to the pro",
            HiddenReason::NotOnReceipt => "The tipper chose not to show a message here",
            HiddenReason::Empty => "No message was left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageVisibility<'a> {
    Visible(&'a str),
    Hidden(HiddenReason),
}

impl MessageVisibility<'_> {
    pub fn is_visible(&self) -> bool {
        matches!(self, MessageVisibility::Visible(_))
    }
}

/// Decide whether the receipt's message is publicly shown.
///
/// Total over privacy, show-flag and message; call it on every render.
pub fn resolve_visibility(receipt: &Receipt) -> MessageVisibility<'_> {
    match receipt.privacy {
        Privacy::Private => return MessageVisibility::Hidden(HiddenReason::Private),
        Privacy::ProOnly => return MessageVisibility::Hidden(HiddenReason::ProOnly),
        Privacy::Receipt if !receipt.show_message => {
            return MessageVisibility::Hidden(HiddenReason::NotOnReceipt)
        }
        Privacy::Receipt | Privacy::Public => {}
    }
    let message = receipt.message.trim();
    if message.is_empty() {
        MessageVisibility::Hidden(HiddenReason::Empty)
    } else {
        MessageVisibility::Visible(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Verified,
    Mismatch,
    Unsigned,
}

impl Verification {
    pub fn label(&self) -> &'static str {
        match self {
            Verification::Verified => "Verified receipt",
            Verification::Mismatch => "Signature does not match",
            Verification::Unsigned => "Unsigned receipt",
        }
    }
}

fn cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

impl Receipt {
    pub fn total(&self) -> f64 {
        self.subtotal + self.tip + self.fee
    }

    /// Tip as a whole percentage of the subtotal.
    pub fn tip_percent(&self) -> Option<u32> {
        if self.subtotal <= 0.0 {
            return None;
        }
        Some((self.tip / self.subtotal * 100.0).round() as u32)
    }

    /// Payment fields covered by the signature.
    ///
    /// Privacy and message are not covered, so editing them keeps the
    /// receipt verified.
    pub fn canonical(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}",
            self.number,
            self.pro_name,
            self.venue,
            cents(self.subtotal),
            cents(self.tip),
            cents(self.fee),
            self.paid_at,
            self.method.brand,
            self.method.last4,
        )
    }

    pub fn digest(&self) -> String {
        hex::encode(blake3::hash(self.canonical().as_bytes()).as_bytes())
    }

    /// Fill in the signature from the current fields.
    pub fn signed(mut self) -> Self {
        self.signature = self.digest();
        self
    }

    pub fn verify(&self) -> Verification {
        if self.signature.trim().is_empty() {
            Verification::Unsigned
        } else if self.signature.trim().eq_ignore_ascii_case(&self.digest()) {
            Verification::Verified
        } else {
            Verification::Mismatch
        }
    }

    /// Signature shortened to its first and last eight characters.
    pub fn short_signature(&self) -> String {
        let sig = self.signature.trim();
        let count = sig.chars().count();
        if count > 16 {
            let head: String = sig.chars().take(8).collect();
            let tail: String = sig.chars().skip(count - 8).collect();
            format!("{}\u{2026}{}", head, tail)
        } else {
            sig.to_string()
        }
    }

    pub fn share_url(&self, base: &str) -> String {
        format!("{}/r/{}", base.trim_end_matches('/'), self.number)
    }

    /// Text handed to the share sheet or clipboard.
    pub fn share_text(&self, base: &str) -> String {
        format!(
            "Tip receipt {} \u{00B7} {} for {} at {}\n{}",
            self.number,
            money(self.total()),
            self.pro_name,
            self.venue,
            self.share_url(base)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt() -> Receipt {
        Receipt {
            number: "RCV-7Q2K-0412".to_string(),
            pro_name: "Maya Chen".to_string(),
            venue: "Blue Door Salon".to_string(),
            subtotal: 60.0,
            tip: 12.0,
            fee: 0.5,
            paid_at: 1_760_000_000_000,
            method: PaymentMethod::new("Visa", "4242"),
            privacy: Privacy::Receipt,
            show_message: true,
            message: "  Thank you! ".to_string(),
            signature: String::new(),
        }
        .signed()
    }

    #[test]
    fn private_and_pro_only_always_hidden() {
        let mut r = receipt();
        r.privacy = Privacy::Private;
        assert_eq!(resolve_visibility(&r), MessageVisibility::Hidden(HiddenReason::Private));
        r.privacy = Privacy::ProOnly;
        assert_eq!(resolve_visibility(&r), MessageVisibility::Hidden(HiddenReason::ProOnly));
    }

    #[test]
    fn receipt_privacy_honours_flag() {
        let mut r = receipt();
        assert_eq!(resolve_visibility(&r), MessageVisibility::Visible("Thank you!"));
        r.show_message = false;
        assert_eq!(resolve_visibility(&r), MessageVisibility::Hidden(HiddenReason::NotOnReceipt));
    }

    #[test]
    fn blank_message_hidden() {
        let mut r = receipt();
        r.message = "   ".to_string();
        assert_eq!(resolve_visibility(&r), MessageVisibility::Hidden(HiddenReason::Empty));
        r.privacy = Privacy::Public;
        assert!(!resolve_visibility(&r).is_visible());
    }

    #[test]
    fn public_ignores_flag() {
        let mut r = receipt();
        r.privacy = Privacy::Public;
        r.show_message = false;
        assert!(resolve_visibility(&r).is_visible());
    }

    #[test]
    fn totals() {
        let r = receipt();
        assert!((r.total() - 72.5).abs() < 1e-9);
        assert_eq!(r.tip_percent(), Some(20));
        let free = Receipt { subtotal: 0.0, ..receipt() };
        assert_eq!(free.tip_percent(), None);
    }

    #[test]
    fn signature_verifies_and_detects_tamper() {
        let r = receipt();
        assert_eq!(r.verify(), Verification::Verified);
        assert_eq!(r.signature.len(), 64);

        let tampered = Receipt { tip: 120.0, ..r.clone() };
        assert_eq!(tampered.verify(), Verification::Mismatch);

        let edited = Receipt {
            message: "changed".to_string(),
            privacy: Privacy::Private,
            ..r
        };
        assert_eq!(edited.verify(), Verification::Verified);
    }

    #[test]
    fn unsigned_receipt() {
        let r = Receipt {
            signature: String::new(),
            ..receipt()
        };
        assert_eq!(r.verify(), Verification::Unsigned);
    }

    #[test]
    fn share_url_and_text() {
        let r = receipt();
        assert_eq!(r.share_url("https://tipjar.app/"), "https://tipjar.app/r/RCV-7Q2K-0412");
        let text = r.share_text("https://tipjar.app");
        assert!(text.contains("$72.50"));
        assert!(text.ends_with("/r/RCV-7Q2K-0412"));
    }

    #[test]
    fn short_signature_trims_middle() {
        let r = receipt();
        let short = r.short_signature();
        assert!(short.starts_with(&r.signature[..8]));
        assert!(short.ends_with(&r.signature[56..]));
    }

    #[test]
    fn tampered_multibyte_signature_shortens_by_chars() {
        let mut r = receipt();
        r.signature = format!("a{}", "\u{e9}".repeat(9));
        assert_eq!(r.verify(), Verification::Mismatch);
        assert_eq!(r.short_signature(), r.signature);

        r.signature = format!("a{}", "\u{e9}".repeat(20));
        let expected = format!("a{}\u{2026}{}", "\u{e9}".repeat(7), "\u{e9}".repeat(8));
        assert_eq!(r.short_signature(), expected);
    }

    #[test]
    fn method_display() {
        assert_eq!(PaymentMethod::new("Visa", "4242").to_string(), "Visa \u{2022}\u{2022}\u{2022}\u{2022} 4242");
    }
}
