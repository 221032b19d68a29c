//! Copy-to-clipboard collaborator with toast feedback.
//!
//! The clipboard and the notification surface are both host concerns, so
//! each sits behind a small trait. A failed copy only produces an error
//! toast; it never touches the draft or the commit pipeline.

use anyhow::Result;

// ── Notifications ─────────────────────────────────────────────────────────

/// Status of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStatus {
    Success,
    Error,
}

/// Sink for transient notifications; the host surfaces these as toasts.
pub trait Notifier {
    fn push(&mut self, status: ToastStatus, title: &str);
}

// ── Clipboard ─────────────────────────────────────────────────────────────

/// Minimal clipboard surface, substitutable by hosts and tests.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, backed by `arboard`. A fresh handle is opened per
/// copy.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut cb = arboard::Clipboard::new()?;
        cb.set_text(text.to_string())?;
        Ok(())
    }
}

// ── Copy action ───────────────────────────────────────────────────────────

/// Copies one labeled output value and reports the outcome.
pub fn copy_value(
    clipboard: &mut dyn Clipboard,
    notifier: &mut dyn Notifier,
    text: &str,
    label: &str,
) {
    match clipboard.set_text(text) {
        Ok(()) => notifier.push(ToastStatus::Success, &format!("Copied {label}")),
        Err(err) => {
            log::warn!("clipboard copy failed: {err:#}");
            notifier.push(ToastStatus::Error, "Copy failed");
        }
    }
}
