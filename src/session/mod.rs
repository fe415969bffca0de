pub mod input;
pub mod result;
pub mod typing;

pub use input::CharStatus;
pub use result::SessionSummary;
pub use typing::{Phase, SessionDelta, TypingSession};
