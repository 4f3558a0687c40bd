//! Logging setup for podteam services.
//!
//! Library crates only emit `tracing` events; the host process calls
//! [`init_logger`] once to decide where they go.
mod logger;
pub use logger::*;
