pub mod command;
pub mod document;
pub mod error;
pub mod fs;
pub mod session;

pub use command::{Command, Directive, Formatter};
pub use document::{Document, Emphasis, HeadingLevel, RowCount};
pub use error::{ComposeError, ComposeResult};
pub use session::{LoopControl, Session, DEFAULT_OUTPUT_PATH};
