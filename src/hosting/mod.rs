//! HTTP surface for the legacy browser client.
//!
//! | Method | Path      | Description |
//! |--------|-----------|-------------|
//! | GET    | `/play`   | next engine move as plain text |
//! | GET    | `/record` | record a finished round |
//! | POST   | `/game`   | report a finished game to analytics |
mod api;
mod client;
mod request;
mod server;
mod session;

pub use api::*;
pub use request::*;
pub use server::*;
pub use session::*;

#[cfg(test)]
mod tests;
