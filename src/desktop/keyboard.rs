//! Keystroke synthesis

use crate::utils::{KeyChord, Modifier};
use anyhow::{anyhow, Result};
use enigo::{Direction, Enigo, Key, Keyboard, Settings};

/// Lazily connected input synthesizer
#[derive(Default)]
pub struct SystemKeyboard {
    inner: Option<Enigo>,
}

impl SystemKeyboard {
    /// Hold the modifier, click the key, release the modifier
    pub fn send_chord(&mut self, chord: KeyChord) -> Result<()> {
        let enigo = match self.inner.take() {
            Some(enigo) => enigo,
            None => Enigo::new(&Settings::default())
                .map_err(|e| anyhow!("Failed to connect to input system: {}", e))?,
        };
        let enigo = self.inner.insert(enigo);

        let modifier = modifier_key(chord.modifier);
        enigo
            .key(modifier, Direction::Press)
            .map_err(|e| anyhow!("Failed to press {:?}: {}", modifier, e))?;

        let clicked = enigo
            .key(Key::Unicode(chord.key), Direction::Click)
            .map_err(|e| anyhow!("Failed to send {}: {}", chord, e));

        // Release even when the click failed, or the modifier stays stuck
        let released = enigo
            .key(modifier, Direction::Release)
            .map_err(|e| anyhow!("Failed to release {:?}: {}", modifier, e));

        clicked.and(released)
    }
}

fn modifier_key(modifier: Modifier) -> Key {
    match modifier {
        Modifier::Command => Key::Meta,
        Modifier::Control => Key::Control,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_mapping() {
        assert_eq!(modifier_key(Modifier::Command), Key::Meta);
        assert_eq!(modifier_key(Modifier::Control), Key::Control);
    }
}
