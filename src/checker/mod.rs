//! Module for the result of a check.
//!
//! Every sub-check produces exactly one [Checker], which holds:
//! - name: `ORCHESTRATOR_<SUBCOMMAND>`, set by the caller.
//! - status: OK, WARNING, CRITICAL or UNKNOWN.
//! - message: a human readable description of the status.
//!
//! The checker is reported as a single line on stdout, after which the process
//! terminates with the exit code that belongs to the status:
//!
//! | status   | exit code |
//! |----------|-----------|
//! | OK       | 0         |
//! | WARNING  | 1         |
//! | CRITICAL | 2         |
//! | UNKNOWN  | 3         |
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
