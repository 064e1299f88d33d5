//! The impls and functions
//!
use log::*;
use crate::checker::Checker;
use crate::status_response;
use crate::cluster_info::{ClusterInfo, ClusterInfoOpts};

impl ClusterInfo {
    fn detail(&self) -> String {
        format!("{} (HasAutomatedMasterRecovery = {}) (HasAutomatedIntermediateMasterRecovery = {})",
                self.cluster_alias, self.has_automated_master_recovery, self.has_automated_intermediate_master_recovery)
    }
}

/// List the managed clusters: the first line lists the aliases, followed by a line per cluster.
pub fn evaluate(
    clusters: &[ClusterInfo],
) -> Checker
{
    if clusters.is_empty() {
        return Checker::warning("This Orchestrator is responding correctly but is not managing any clusters.");
    }
    for cluster in clusters {
        debug!("cluster {} ({}): {} instances, heuristic lag {}", cluster.cluster_alias, cluster.cluster_name, cluster.count_instances, cluster.heuristic_lag);
    }

    let aliases = clusters.iter().map(|cluster| cluster.cluster_alias.as_str()).collect::<Vec<_>>().join(", ");
    let details = clusters.iter().map(ClusterInfo::detail).collect::<Vec<_>>().join("\n");

    Checker::ok(format!("This instance manages following clusters: {}\n{}", aliases, details))
}

pub fn check_cluster_info(
    options: &ClusterInfoOpts,
) -> Checker
{
    let endpoint = options.orchestrator.endpoint();
    status_response::read_and_evaluate(&endpoint, &options.uri, |clusters: Vec<ClusterInfo>| evaluate(&clusters))
}
