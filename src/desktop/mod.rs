pub mod clipboard;
pub mod keyboard;
pub mod traits;

pub use clipboard::SystemClipboard;
pub use keyboard::SystemKeyboard;
pub use traits::{DesktopBackend, SystemDesktop};
