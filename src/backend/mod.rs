pub mod actor;
pub mod messages;

pub use actor::{PasteActor, PasteHandle};
pub use messages::{PasteCommand, PasteOutcome};
