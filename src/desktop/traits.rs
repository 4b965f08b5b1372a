use super::{SystemClipboard, SystemKeyboard};
use crate::utils::KeyChord;
use anyhow::Result;

/// Access to the OS clipboard and input synthesis
///
/// This trait isolates the paste sequence from the desktop it runs on, so the
/// actor can be exercised against a recording fake. Implementations are
/// created and used on the actor thread only and need not be `Send`.
pub trait DesktopBackend {
    /// Replaces the clipboard contents with `text`
    fn set_clipboard(&mut self, text: &str) -> Result<()>;

    /// Presses and releases the chord in the focused application
    fn send_chord(&mut self, chord: KeyChord) -> Result<()>;
}

/// The real desktop: arboard for the clipboard, enigo for keystrokes
#[derive(Default)]
pub struct SystemDesktop {
    clipboard: SystemClipboard,
    keyboard: SystemKeyboard,
}

impl SystemDesktop {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DesktopBackend for SystemDesktop {
    fn set_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text)
    }

    fn send_chord(&mut self, chord: KeyChord) -> Result<()> {
        self.keyboard.send_chord(chord)
    }
}
