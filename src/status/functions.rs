//! The impls and functions
//!
use serde_json::Value;
use crate::checker::Checker;
use crate::status_response;
use crate::status::StatusOpts;

/// A list is not expected from the health endpoint.
pub fn evaluate(
    payload: Vec<Value>,
) -> Checker
{
    Checker::unknown(format!("Expected a status response, got a list of {} entries", payload.len()))
}

pub fn check_status(
    options: &StatusOpts,
) -> Checker
{
    let endpoint = options.orchestrator.endpoint();
    status_response::read_and_evaluate(&endpoint, &options.uri, evaluate)
}
