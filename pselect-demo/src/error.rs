use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Terminal(#[from] pselect::Error),
}
