use crate::utils::PasteError;
use std::time::Duration;
use tokio::sync::oneshot;

/// Commands sent from the HTTP handlers to the paste actor
#[derive(Debug)]
pub enum PasteCommand {
    /// Copy, wait, then send the paste chord
    Paste {
        text: String,
        delay: Duration,
        reply: oneshot::Sender<Result<PasteOutcome, PasteError>>,
    },
    // System
    Shutdown,
}

/// Result of a completed paste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteOutcome {
    /// Characters written to the clipboard
    pub length: usize,
}
