//! Check plugin for the orchestrator topology manager.
//!
//! Every check reads one endpoint of the orchestrator HTTP API, and reduces the response to a
//! [checker::Checker] with status OK, WARNING, CRITICAL or UNKNOWN:
//! - [cluster_health]: the replication health of a single cluster.
//! - [cluster_info]: the clusters managed by the orchestrator.
//! - [status]: the health of the orchestrator itself.
//!
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

pub mod checker;
pub mod utility;
pub mod orchestrator;
pub mod status_response;
pub mod cluster_health;
pub mod cluster_info;
pub mod status;
