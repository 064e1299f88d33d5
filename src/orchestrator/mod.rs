//! Module for reading the orchestrator HTTP API.
//!
//! Every check performs exactly one GET request to the orchestrator, on:
//! `{http|https}://host:port/path`.
//!
//! The connection settings are shared by all the checks:
//! - host and port, which can be set as argument, in `.env` or use the defaults (localhost:3000).
//! - ssl, to use https instead of http.
//! - insecure, to not verify the certificate of the orchestrator when using https.
//! - basic authentication name and password, only sent when both are set.
//! - the timeout for the request.
//!
//! The response body is read completely, and returned as bytes.
//! A failure to connect or to read the response is returned as error, there are no retries.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
