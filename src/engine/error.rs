use crate::game::Side;

/// Failures of the prediction and recording operations.
///
/// Only recording surfaces these to callers. Prediction logs
/// [`Error::StoreQueryFailure`] and degrades to a random move.
#[derive(Debug)]
pub enum Error {
    /// Current move missing, unrecognized, or not a single move.
    InvalidMove(Side, String),
    /// History could not be read in time.
    StoreQueryFailure(anyhow::Error),
    /// Round could not be appended; nothing was recorded.
    StoreWriteFailure(anyhow::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove(side, raw) => write!(f, "invalid {} move: {:?}", side, raw),
            Self::StoreQueryFailure(e) => write!(f, "history query failed: {}", e),
            Self::StoreWriteFailure(e) => write!(f, "history append failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMove(..) => None,
            Self::StoreQueryFailure(e) | Self::StoreWriteFailure(e) => Some(&**e),
        }
    }
}
