//! Prediction and recording over a history store.
//!
//! - [`Predictor`] - counter-move selection with random fallback
//! - [`Recorder`] - validation and append of finished rounds
//! - [`Tally`] - move frequencies and the tie-break policy
//! - [`Tuning`] - context lengths, query bound, store timeout
mod error;
mod predictor;
mod recorder;
mod tally;
mod tuning;

pub use error::*;
pub use predictor::*;
pub use recorder::*;
pub use tally::*;
pub use tuning::*;
