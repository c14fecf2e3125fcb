//! PostgreSQL connectivity and table metadata.
//!
//! - [`db()`] - connects from `DB_URL` and prepares every table
//! - [`Schema`] - DDL for a persisted domain type
mod connect;
mod schema;

pub use connect::*;
pub use schema::*;

/// Table for recorded rounds.
#[rustfmt::skip]
pub const ROUNDS: &str = "rounds";
