//! System clipboard access.
//!
//! Copy failures (no display server, clipboard locked by another process)
//! are logged and otherwise ignored: the caller only learns whether to show
//! the "copied" notification.

use tracing::warn;

/// Message shown after a successful copy.
pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// Destination for copied text.
pub trait ClipboardSink {
    /// Places `text` on the clipboard.
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// The operating system clipboard, via `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string()))?;
        Ok(())
    }
}

/// In-memory clipboard recording every copy.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    /// Copied texts, oldest first
    pub history: Vec<String>,
    /// Makes every copy fail when set
    pub fail: bool,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("clipboard unavailable");
        }
        self.history.push(text.to_string());
        Ok(())
    }
}

/// Copies `text`, returning true on success. Failures are logged.
pub fn copy_text(sink: &mut dyn ClipboardSink, text: &str) -> bool {
    match sink.set_text(text) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to copy to clipboard: {e:#}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_text_success() {
        let mut clipboard = MemoryClipboard::default();
        assert!(copy_text(&mut clipboard, "<div></div>"));
        assert_eq!(clipboard.history, ["<div></div>"]);
    }

    #[test]
    fn test_copy_text_failure_is_swallowed() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..MemoryClipboard::default()
        };
        assert!(!copy_text(&mut clipboard, "x"));
        assert!(clipboard.history.is_empty());
    }
}
