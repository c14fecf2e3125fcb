use std::time::Duration;

/// Knobs shared by prediction and recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    /// Moves per side in the lookup key.
    pub key_length: usize,
    /// Moves per side kept on each stored round.
    pub context_length: usize,
    /// Most recent matching rounds considered per prediction.
    pub query_limit: usize,
    /// Bound on each history store call.
    pub timeout: Duration,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            key_length: crate::CONTEXT_KEY_LENGTH,
            context_length: crate::CONTEXT_AUDIT_LENGTH,
            query_limit: crate::HISTORY_QUERY_LIMIT,
            timeout: crate::HISTORY_STORE_TIMEOUT,
        }
    }
}
