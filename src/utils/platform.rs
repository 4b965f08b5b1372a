//! Platform-specific paste keystrokes
//!
//! The host OS is detected once at startup and handed to the paste actor,
//! so chord selection stays a pure function that tests can drive directly.

use std::fmt;

/// Operating system family, as far as paste shortcuts are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    /// macOS
    Apple,
    /// Windows, Linux and everything else
    Other,
}

impl HostOs {
    /// Host the binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            HostOs::Apple
        } else {
            HostOs::Other
        }
    }
}

/// Modifier held down while the key is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Command,
    Control,
}

/// Keys pressed together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub modifier: Modifier,
    pub key: char,
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifier = match self.modifier {
            Modifier::Command => "command",
            Modifier::Control => "ctrl",
        };
        write!(f, "{}+{}", modifier, self.key)
    }
}

/// Paste shortcut for the given host: Cmd+V on macOS, Ctrl+V elsewhere
pub fn paste_chord(host: HostOs) -> KeyChord {
    let modifier = match host {
        HostOs::Apple => Modifier::Command,
        HostOs::Other => Modifier::Control,
    };
    KeyChord { modifier, key: 'v' }
}
