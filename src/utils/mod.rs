//! Utility modules for error handling, configuration and platform details

pub mod config;
pub mod error;
pub mod platform;
pub mod text;

// Re-export for convenience
pub use config::ServerConfig;
pub use error::PasteError;
pub use platform::{paste_chord, HostOs, KeyChord, Modifier};
