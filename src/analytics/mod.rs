//! Fire-and-forget export of play and game events.
//!
//! Export never influences the outcome of the request that produced
//! the event: failures are retried once and then only logged.
mod event;
mod exporter;

pub use event::*;
pub use exporter::*;
