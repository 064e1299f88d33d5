//! Module for checking the health of a replication cluster via `/api/cluster/alias/<alias>`.
//!
//! The `/api/cluster/alias/<alias>` endpoint returns the topology of the cluster: a list with an
//! entry for every server (instance) in the cluster, or a status response if the alias is not known.
//!
//! The health of the cluster is determined by these rules, the first rule that matches decides:
//! 1. Over all servers (including downtimed ones), the number of writable servers must be exactly one.
//!    More than one is CRITICAL (split brain), none is CRITICAL (read only cluster).
//! 2. For every server in the order of the list, skipping servers that are downtimed:
//!    - a replica must have its IO thread and SQL thread running, otherwise CRITICAL.
//!    - the lag, minus the configured replication delay, above the critical threshold is CRITICAL.
//!    - the lag, minus the configured replication delay, above the warning threshold is WARNING.
//!    - the seconds since the server was last seen above the timeout is WARNING.
//! 3. Otherwise the cluster is OK.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
