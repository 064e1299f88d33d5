//! check_orchestrator: a monitoring check for the orchestrator topology manager.
//!
//! Usage:
//! ```text
//! check_orchestrator clusterhealth --alias <ALIAS> [OPTIONS]
//! check_orchestrator clusterinfo [OPTIONS]
//! check_orchestrator status [OPTIONS]
//! ```
//! The result is printed as a single line, and the exit code is the status:
//! 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::*;

use check_orchestrator::checker::Checker;
use check_orchestrator::cluster_health::{self, ClusterHealthOpts};
use check_orchestrator::cluster_info::{self, ClusterInfoOpts};
use check_orchestrator::status::{self, StatusOpts};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Opts {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check the replication health of a cluster
    #[command(name = "clusterhealth")]
    ClusterHealth(ClusterHealthOpts),
    /// List the clusters managed by the orchestrator
    #[command(name = "clusterinfo")]
    ClusterInfo(ClusterInfoOpts),
    /// Check the health of the orchestrator
    #[command(name = "status")]
    Status(StatusOpts),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::ClusterHealth(_) => "clusterhealth",
            Commands::ClusterInfo(_) => "clusterinfo",
            Commands::Status(_) => "status",
        }
    }
    fn run(&self) -> Checker {
        match self {
            Commands::ClusterHealth(options) => cluster_health::check_cluster_health(options),
            Commands::ClusterInfo(options) => cluster_info::check_cluster_info(options),
            Commands::Status(options) => status::check_status(options),
        }
    }
}

fn main() {
    dotenv().ok();
    env_logger::init();
    let options = Opts::parse();
    info!("running check {}", options.command.name());

    let name = format!("ORCHESTRATOR_{}", options.command.name().to_uppercase());
    options.command.run().with_name(name).exit()
}
