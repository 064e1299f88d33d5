//! Module for checking the orchestrator itself via `/api/health`.
//!
//! The `/api/health` endpoint returns a status response:
//! ```json
//! {"Code":"OK","Message":"Application node is healthy","Details":{"Healthy":true}}
//! ```
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
