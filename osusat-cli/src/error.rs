use osusat_protocol::FrameError;

// Exit codes
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const USAGE: i32 = 64;

pub type CliResult<T> = Result<T, CliError>;

/// Errors reported by `osusat` subcommands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The codec rejected a frame
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// Input was not valid hex
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    /// A decoded frame differs from the one that was encoded
    #[error("round trip mismatch: {0}")]
    Mismatch(&'static str),
}

impl CliError {
    /// Process exit code for this error
    pub fn code(&self) -> i32 {
        match self {
            CliError::Frame(_) | CliError::Mismatch(_) => FAILURE,
            CliError::Hex(_) => USAGE,
        }
    }
}
