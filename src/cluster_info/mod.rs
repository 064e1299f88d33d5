//! Module for listing the clusters an orchestrator manages via `/api/clusters-info`.
//!
//! The `/api/clusters-info` endpoint returns a list with an entry per cluster. The check is OK if
//! the orchestrator manages one or more clusters, and lists the aliases and whether automated
//! recovery is enabled. An orchestrator that manages no clusters is a WARNING.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
