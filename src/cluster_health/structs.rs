//! The structs
//!
use std::fmt;
use clap::Args;
use crate::orchestrator::OrchestratorOpts;

/// The options for the clusterhealth check.
#[derive(Args, Debug, Clone)]
pub struct ClusterHealthOpts {
    /// Alias of the cluster
    #[arg(short = 'a', long = "alias")]
    pub cluster_alias: String,
    #[command(flatten)]
    pub orchestrator: OrchestratorOpts,
    /// Timeout for SecondsSinceLastSeen
    #[arg(short = 't', long = "timeout", default_value_t = 300, value_parser = clap::value_parser!(i64).range(0..))]
    pub seconds_since_last_seen_threshold: i64,
    /// Slave lag warning threshold
    #[arg(short = 'w', long = "lag-warning", default_value_t = 300, value_parser = clap::value_parser!(i64).range(0..))]
    pub slave_lag_warning_threshold: i64,
    /// Slave lag critical threshold
    #[arg(short = 'c', long = "lag-critical", default_value_t = 600, value_parser = clap::value_parser!(i64).range(0..))]
    pub slave_lag_critical_threshold: i64,
}
/// The thresholds for a cluster health evaluation, in seconds.
///
/// The critical lag threshold should be higher than the warning lag threshold, this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub last_seen_timeout: i64,
    pub lag_warning: i64,
    pub lag_critical: i64,
}
/// The identity of a server: hostname and port.
///
/// For the master key of a server that is not a replica, the hostname is empty and the port is 0.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServerKey {
    pub hostname: String,
    pub port: i64,
}

impl fmt::Display for ServerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hostname, self.port)
    }
}
/// A server in the cluster, as returned in the list of `/api/cluster/alias/<alias>`.
///
/// Only the fields used for the health check are parsed:
/// ```json
/// {
///   "Key": {"Hostname": "db2", "Port": 3306},
///   "ReadOnly": true,
///   "MasterKey": {"Hostname": "db1", "Port": 3306},
///   "Slave_SQL_Running": true,
///   "Slave_IO_Running": true,
///   "SlaveLagSeconds": {"Int64": 0, "Valid": true},
///   "SecondsSinceLastSeen": {"Int64": 2, "Valid": true},
///   "IsDowntimed": false,
///   "SQLDelay": 0
/// }
/// ```
/// The nullable integers are `{"Int64": n, "Valid": bool}`, a value that is not valid is `None`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClusterDetail {
    pub key: ServerKey,
    pub read_only: bool,
    pub master_key: ServerKey,
    #[serde(rename = "Slave_SQL_Running")]
    pub slave_sql_running: bool,
    #[serde(rename = "Slave_IO_Running")]
    pub slave_io_running: bool,
    #[serde(deserialize_with = "crate::cluster_health::deserialize_null_int64")]
    pub slave_lag_seconds: Option<i64>,
    #[serde(deserialize_with = "crate::cluster_health::deserialize_null_int64")]
    pub seconds_since_last_seen: Option<i64>,
    pub is_downtimed: bool,
    #[serde(rename = "SQLDelay")]
    pub sql_delay: i64,
}
