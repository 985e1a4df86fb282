//! Clipboard hand-off for discount codes.
//!
//! Copying is fire-and-forget: success is surfaced as a transient
//! notification, failure only skips that notification. A write failure
//! must never propagate out of the view.

use std::sync::Mutex;

use benefia_core::models::discount::DiscountCode;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Destination for copied text. The portal only ever writes.
pub trait Clipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy a discount's redemption code. Returns whether the success
/// notification should be shown; failure is logged and absorbed.
pub fn copy_discount_code<C: Clipboard>(clipboard: &C, discount: &DiscountCode) -> bool {
    match clipboard.write(&discount.code) {
        Ok(()) => true,
        Err(e) => {
            debug!(partner = %discount.partner_name, error = %e, "clipboard write failed");
            false
        }
    }
}

/// In-process clipboard holding the last written value.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| ClipboardError("lock poisoned".into()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError("permission denied".into()))
        }
    }

    fn discount() -> DiscountCode {
        let now = Utc::now();
        DiscountCode {
            id: Uuid::new_v4(),
            partner_name: "Elixia".into(),
            partner_logo: None,
            description: "Kuntosalialennus".into(),
            code: "ELIXIA-HLO-24".into(),
            discount_amount: "-20 %".into(),
            categories: vec!["sports".into()],
            valid_from: now,
            valid_to: now + chrono::Duration::days(90),
            partner_url: "https://elixia.fi".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn copies_redemption_code() {
        let clipboard = MemoryClipboard::new();
        assert!(copy_discount_code(&clipboard, &discount()));
        assert_eq!(clipboard.contents().as_deref(), Some("ELIXIA-HLO-24"));
    }

    #[test]
    fn failure_is_absorbed() {
        assert!(!copy_discount_code(&DeniedClipboard, &discount()));
    }
}
