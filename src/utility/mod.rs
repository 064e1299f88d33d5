//! Utilities
//!
//! Resolution of settings that can be given on the command line, in `.env`, or fall back to a default.
//!
mod functions;

pub use functions::*;
