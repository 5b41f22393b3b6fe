use thiserror::Error;

/// Errors raised by the terminal substrate.
///
/// The select control itself never fails; only talking to the terminal can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
