use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("heading level must be within the range of 1 to 6, got {0}")]
    HeadingLevelOutOfRange(i64),

    #[error("row count must be greater than zero, got {0}")]
    RowCountOutOfRange(i64),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type ComposeResult<T> = Result<T, ComposeError>;
