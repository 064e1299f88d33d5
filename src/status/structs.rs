//! The structs
//!
use clap::Args;
use crate::orchestrator::OrchestratorOpts;

#[derive(Args, Debug, Clone)]
pub struct StatusOpts {
    #[command(flatten)]
    pub orchestrator: OrchestratorOpts,
    /// URI
    #[arg(short = 'U', long, default_value = "api/health")]
    pub uri: String,
}
