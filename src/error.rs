use thiserror::Error;

/// Errors raised by the terminal shell. The game core itself never fails.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger setup failed: {0}")]
    Logger(String),

    #[error("terminal is {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
}

impl From<log::SetLoggerError> for GameError {
    fn from(e: log::SetLoggerError) -> Self {
        GameError::Logger(e.to_string())
    }
}
