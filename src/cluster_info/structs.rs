//! The structs
//!
use clap::Args;
use crate::orchestrator::OrchestratorOpts;

#[derive(Args, Debug, Clone)]
pub struct ClusterInfoOpts {
    #[command(flatten)]
    pub orchestrator: OrchestratorOpts,
    /// URI
    #[arg(short = 'U', long, default_value = "api/clusters-info")]
    pub uri: String,
}
/// A cluster, as returned in the list of `/api/clusters-info`:
/// ```json
/// {
///   "ClusterName": "db1:3306",
///   "ClusterAlias": "prod1",
///   "ClusterDomain": "",
///   "CountInstances": 3,
///   "HeuristicLag": 0,
///   "HasAutomatedMasterRecovery": true,
///   "HasAutomatedIntermediateMasterRecovery": true
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClusterInfo {
    pub cluster_name: String,
    pub cluster_alias: String,
    pub cluster_domain: String,
    pub count_instances: i64,
    pub heuristic_lag: i64,
    pub has_automated_master_recovery: bool,
    pub has_automated_intermediate_master_recovery: bool,
}
