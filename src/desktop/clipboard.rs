//! Clipboard functionality

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Lazily opened system clipboard
///
/// The handle is kept open after the first write: on X11 and Wayland the
/// owning process has to stay alive and hold the selection, otherwise the
/// text disappears before the paste keystroke lands.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    /// Set clipboard content
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().context("Failed to access clipboard")?,
        };
        let clipboard = self.inner.insert(clipboard);

        if let Err(e) = clipboard.set_text(text) {
            // A broken handle (e.g. the display went away) is reopened next time
            self.inner = None;
            return Err(e).context("Failed to write clipboard");
        }

        Ok(())
    }
}
