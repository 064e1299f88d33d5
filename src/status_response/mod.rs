//! Module for classifying the responses of the orchestrator API.
//!
//! The orchestrator replies in one of two shapes:
//! - a status response, which is a JSON object, for errors and informational replies:
//! ```json
//! {"Code":"ERROR","Message":"Unable to determine cluster name","Details":null}
//! ```
//! - the data itself, which is a JSON array, for example a list of instances or clusters.
//!
//! The shape of the JSON document decides which of the two it is. A status response with code `OK`
//! results in OK, any other code in CRITICAL, both with the message of the status response.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
