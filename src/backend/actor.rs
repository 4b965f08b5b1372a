use super::messages::{PasteCommand, PasteOutcome};
use crate::desktop::DesktopBackend;
use crate::utils::text::{char_count, preview};
use crate::utils::{paste_chord, HostOs, KeyChord, PasteError};
use anyhow::{Context, Result};
use std::thread;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

/// Pending paste commands before senders start waiting
const COMMAND_BUFFER: usize = 32;

/// Owns the desktop and performs pastes one at a time
///
/// Runs on its own OS thread: clipboard and input handles are not always
/// `Send`, and the settle delay must never stall the async runtime. Because
/// every paste is a single command, the copy/wait/keystroke sequence of one
/// request can never interleave with another's.
pub struct PasteActor<B: DesktopBackend> {
    receiver: mpsc::Receiver<PasteCommand>,
    backend: B,
    chord: KeyChord,
}

impl<B: DesktopBackend> PasteActor<B> {
    pub fn new(receiver: mpsc::Receiver<PasteCommand>, backend: B, host: HostOs) -> Self {
        Self {
            receiver,
            backend,
            chord: paste_chord(host),
        }
    }

    /// Spawns the actor thread and returns a handle to it
    ///
    /// `factory` builds the backend on the actor thread itself.
    pub fn spawn<F>(factory: F, host: HostOs) -> Result<PasteHandle>
    where
        F: FnOnce() -> B + Send + 'static,
        B: 'static,
    {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);

        thread::Builder::new()
            .name("paste-actor".to_string())
            .spawn(move || PasteActor::new(receiver, factory(), host).run())
            .context("Failed to spawn paste actor thread")?;

        Ok(PasteHandle { sender })
    }

    /// Processes commands until shutdown or until every handle is dropped
    pub fn run(mut self) {
        info!("PasteActor started (chord: {})", self.chord);

        while let Some(cmd) = self.receiver.blocking_recv() {
            match cmd {
                PasteCommand::Paste { text, delay, reply } => {
                    let result = self.handle_paste(&text, delay);
                    if reply.send(result).is_err() {
                        debug!("Paste requester went away before the reply");
                    }
                }
                PasteCommand::Shutdown => {
                    info!("PasteActor shutting down");
                    break;
                }
            }
        }
    }

    fn handle_paste(&mut self, text: &str, delay: Duration) -> Result<PasteOutcome, PasteError> {
        let length = char_count(text);

        self.backend.set_clipboard(text).map_err(|e| {
            error!("Clipboard write failed: {:#}", e);
            PasteError::Clipboard(format!("{:#}", e))
        })?;
        info!("Copied {} chars to clipboard", length);

        // Let the target application settle focus before the keystroke arrives
        thread::sleep(delay);

        // No rollback: the clipboard keeps the new text if this fails
        let chord = self.chord;
        self.backend.send_chord(chord).map_err(|e| {
            error!("Sending {} failed: {:#}", chord, e);
            PasteError::Keystroke(format!("{:#}", e))
        })?;
        info!("Pasted text: {}...", preview(text));

        Ok(PasteOutcome { length })
    }
}

/// Cheap, cloneable client of the paste actor
#[derive(Debug, Clone)]
pub struct PasteHandle {
    sender: mpsc::Sender<PasteCommand>,
}

impl PasteHandle {
    /// Runs one paste and waits for it to finish
    pub async fn paste(&self, text: String, delay: Duration) -> Result<PasteOutcome, PasteError> {
        let (reply, response) = oneshot::channel();

        self.sender
            .send(PasteCommand::Paste { text, delay, reply })
            .await
            .map_err(|_| PasteError::BackendUnavailable)?;

        response.await.map_err(|_| PasteError::BackendUnavailable)?
    }

    /// Asks the actor to stop after the commands already queued
    pub async fn shutdown(&self) {
        if self.sender.send(PasteCommand::Shutdown).await.is_err() {
            debug!("PasteActor already stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Modifier;
    use anyhow::anyhow;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clipboard(String),
        Chord(KeyChord),
    }

    #[derive(Default, Clone)]
    struct Recorder {
        calls: Arc<Mutex<Vec<(Call, Instant)>>>,
        fail_clipboard: bool,
        fail_chord: bool,
    }

    impl Recorder {
        fn calls(&self) -> Vec<Call> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(call, _)| call.clone())
                .collect()
        }
    }

    impl DesktopBackend for Recorder {
        fn set_clipboard(&mut self, text: &str) -> Result<()> {
            if self.fail_clipboard {
                return Err(anyhow!("no display"));
            }
            self.calls
                .lock()
                .unwrap()
                .push((Call::Clipboard(text.to_string()), Instant::now()));
            Ok(())
        }

        fn send_chord(&mut self, chord: KeyChord) -> Result<()> {
            if self.fail_chord {
                return Err(anyhow!("permission denied"));
            }
            self.calls
                .lock()
                .unwrap()
                .push((Call::Chord(chord), Instant::now()));
            Ok(())
        }
    }

    fn actor(recorder: &Recorder, host: HostOs) -> PasteActor<Recorder> {
        let (_sender, receiver) = mpsc::channel(1);
        PasteActor::new(receiver, recorder.clone(), host)
    }

    #[test]
    fn test_copy_then_chord() {
        let recorder = Recorder::default();
        let mut actor = actor(&recorder, HostOs::Other);

        let outcome = actor.handle_paste("héllo", Duration::ZERO).unwrap();

        assert_eq!(outcome.length, 5);
        assert_eq!(
            recorder.calls(),
            vec![
                Call::Clipboard("héllo".to_string()),
                Call::Chord(KeyChord {
                    modifier: Modifier::Control,
                    key: 'v'
                }),
            ]
        );
    }

    #[test]
    fn test_apple_host_sends_command_v() {
        let recorder = Recorder::default();
        let mut actor = actor(&recorder, HostOs::Apple);

        actor.handle_paste("x", Duration::ZERO).unwrap();

        assert_eq!(
            recorder.calls()[1],
            Call::Chord(paste_chord(HostOs::Apple))
        );
    }

    #[test]
    fn test_delay_separates_copy_and_chord() {
        let recorder = Recorder::default();
        let mut actor = actor(&recorder, HostOs::Other);

        actor
            .handle_paste("wait for it", Duration::from_millis(200))
            .unwrap();

        let calls = recorder.calls.lock().unwrap();
        let elapsed = calls[1].1.duration_since(calls[0].1);
        assert!(elapsed >= Duration::from_millis(200), "elapsed {:?}", elapsed);
    }

    #[test]
    fn test_clipboard_failure_skips_chord() {
        let recorder = Recorder {
            fail_clipboard: true,
            ..Default::default()
        };
        let mut actor = actor(&recorder, HostOs::Other);

        let err = actor.handle_paste("text", Duration::ZERO).unwrap_err();

        assert_eq!(err, PasteError::Clipboard("no display".to_string()));
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_chord_failure_keeps_clipboard() {
        let recorder = Recorder {
            fail_chord: true,
            ..Default::default()
        };
        let mut actor = actor(&recorder, HostOs::Other);

        let err = actor.handle_paste("text", Duration::ZERO).unwrap_err();

        assert_eq!(err, PasteError::Keystroke("permission denied".to_string()));
        assert_eq!(recorder.calls(), vec![Call::Clipboard("text".to_string())]);
    }

    #[tokio::test]
    async fn test_handle_round_trip_and_shutdown() {
        let recorder = Recorder::default();
        let backend = recorder.clone();
        let handle = PasteActor::spawn(move || backend, HostOs::Other).unwrap();

        let outcome = handle
            .paste("over the channel".to_string(), Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(outcome.length, 16);

        handle.shutdown().await;
        let err = handle
            .paste("late".to_string(), Duration::ZERO)
            .await
            .unwrap_err();
        assert_eq!(err, PasteError::BackendUnavailable);
        assert_eq!(recorder.calls().len(), 2);
    }
}
