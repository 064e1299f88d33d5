//! The impls and functions
//!
use log::*;
use serde::{Deserialize, Deserializer};
use crate::checker::Checker;
use crate::status_response;
use crate::cluster_health::{ClusterDetail, ClusterHealthOpts, ServerKey, Thresholds};

/// Deserialize a nullable integer as the orchestrator writes it: `{"Int64": 12, "Valid": true}`.
/// A bare integer is accepted too. `null`, or `Valid` being false, results in `None`.
pub fn deserialize_null_int64<'de, D>(
    deserializer: D,
) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NullInt64 {
        Wrapped {
            #[serde(rename = "Int64", default)]
            int64: i64,
            #[serde(rename = "Valid", default)]
            valid: bool,
        },
        Bare(i64),
    }

    Ok(match Option::<NullInt64>::deserialize(deserializer)? {
        Some(NullInt64::Wrapped { int64, valid: true }) => Some(int64),
        Some(NullInt64::Wrapped { .. }) => None,
        Some(NullInt64::Bare(value)) => Some(value),
        None => None,
    })
}

impl ServerKey {
    /// The master key of a replica has a hostname, the master key of a primary is empty.
    pub fn is_set(&self) -> bool {
        !self.hostname.is_empty()
    }
}

impl ClusterDetail {
    pub fn is_writable(&self) -> bool {
        !self.read_only
    }
    pub fn is_replica(&self) -> bool {
        self.master_key.is_set()
    }
    /// The lag minus the configured replication delay (SQLDelay), if a delay is set.
    pub fn effective_lag(&self) -> Option<i64> {
        self.slave_lag_seconds.map(|lag| {
            if self.sql_delay > 0 { lag.saturating_sub(self.sql_delay) } else { lag }
        })
    }
}

impl From<&ClusterHealthOpts> for Thresholds {
    fn from(options: &ClusterHealthOpts) -> Self {
        Thresholds {
            last_seen_timeout: options.seconds_since_last_seen_threshold,
            lag_warning: options.slave_lag_warning_threshold,
            lag_critical: options.slave_lag_critical_threshold,
        }
    }
}

/// Evaluate the health of the servers of cluster `cluster_alias`.
///
/// This walks the rules described in the module documentation and returns at the first violation.
pub fn evaluate(
    servers: &[ClusterDetail],
    cluster_alias: &str,
    thresholds: &Thresholds,
) -> Checker
{
    // the number of writers is counted over all servers, downtimed or not.
    let nr_of_writers = servers.iter().filter(|server| server.is_writable()).count();
    debug!("cluster {}: {} servers, {} writable", cluster_alias, servers.len(), nr_of_writers);

    if nr_of_writers > 1 {
        return Checker::critical(format!("[SPLIT BRAIN] There are {} writable servers in cluster {}", nr_of_writers, cluster_alias));
    }
    if nr_of_writers < 1 {
        return Checker::critical(format!("[READ ONLY CLUSTER] There are {} writable servers in cluster {}", nr_of_writers, cluster_alias));
    }

    for server in servers.iter().filter(|server| !server.is_downtimed) {
        if server.is_replica() {
            if !server.slave_io_running {
                return Checker::critical(format!("In cluster {} the Slave_IO-thread is not running on host {}", cluster_alias, server.key));
            }
            if !server.slave_sql_running {
                return Checker::critical(format!("In cluster {} the Slave_SQL-thread is not running on host {}", cluster_alias, server.key));
            }
        }

        // the message reports the lag as the server reports it, the thresholds apply to the lag without delay.
        if let (Some(lag), Some(effective_lag)) = (server.slave_lag_seconds, server.effective_lag()) {
            if effective_lag > thresholds.lag_critical {
                return Checker::critical(format!("In cluster {} host {} is {} seconds lagging (critical threshold {})", cluster_alias, server.key, lag, thresholds.lag_critical));
            }
            if effective_lag > thresholds.lag_warning {
                return Checker::warning(format!("In cluster {} host {} is {} seconds lagging (warning threshold {})", cluster_alias, server.key, lag, thresholds.lag_warning));
            }
        }

        if let Some(last_seen) = server.seconds_since_last_seen {
            if last_seen > thresholds.last_seen_timeout {
                return Checker::warning(format!("In cluster {} the host {} was not seen for {} seconds (warning limit {})", cluster_alias, server.key, last_seen, thresholds.last_seen_timeout));
            }
        }
    }

    Checker::ok(format!("Cluster {} is doing OK", cluster_alias))
}

/// Check the health of the cluster set with `--alias`.
pub fn check_cluster_health(
    options: &ClusterHealthOpts,
) -> Checker
{
    let endpoint = options.orchestrator.endpoint();
    let thresholds = Thresholds::from(options);
    let cluster_alias = options.cluster_alias.as_str();
    info!("check cluster health of {} with {:?}", cluster_alias, thresholds);

    status_response::read_and_evaluate(&endpoint, &format!("api/cluster/alias/{}", cluster_alias), |servers: Vec<ClusterDetail>| {
        evaluate(&servers, cluster_alias, &thresholds)
    })
}
