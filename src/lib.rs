//! Paste server library
//!
//! A loopback HTTP service that writes text to the system clipboard and
//! then synthesizes the platform paste shortcut in the focused application.

pub mod backend;
pub mod desktop;
pub mod server;
pub mod utils;

// Re-export main types for easier use
pub use backend::{PasteActor, PasteHandle, PasteOutcome};
pub use desktop::{DesktopBackend, SystemDesktop};
pub use server::{router, serve, AppState};
pub use utils::{HostOs, KeyChord, PasteError, ServerConfig};
