//! Append-only round history behind a query-by-context capability.
//!
//! - [`HistoryStore`] - the capability the engine consumes
//! - [`Memory`] - in-process store for tests and single-node runs
//! - `Client` - PostgreSQL store (feature `database`)
mod memory;
mod store;

#[cfg(feature = "database")]
mod postgres;

pub use memory::*;
pub use store::*;
