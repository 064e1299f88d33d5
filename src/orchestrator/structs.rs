//! The structs
//!
use clap::Args;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_HTTP_TIMEOUT: u64 = 30;

/// The connection options, which are flattened into every subcommand.
#[derive(Args, Debug, Clone)]
pub struct OrchestratorOpts {
    /// Hostname of the orchestrator [env: ORCHESTRATOR_HOST] [default: localhost]
    #[arg(short = 'H', long)]
    pub host: Option<String>,
    /// Port of the orchestrator [env: ORCHESTRATOR_PORT] [default: 3000]
    #[arg(short, long)]
    pub port: Option<String>,
    /// Use SSL
    #[arg(short = 'S', long)]
    pub ssl: bool,
    /// Do not check the SSL certificate
    #[arg(short = 'I', long)]
    pub insecure: bool,
    /// Basic authentication user name [env: ORCHESTRATOR_HTTP_AUTH_NAME]
    #[arg(long)]
    pub http_auth_name: Option<String>,
    /// Basic authentication password [env: ORCHESTRATOR_HTTP_AUTH_PASS]
    #[arg(long)]
    pub http_auth_pass: Option<String>,
    /// Timeout in seconds for the HTTP request
    #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT, value_parser = clap::value_parser!(u64).range(1..))]
    pub http_timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub name: String,
    pub password: String,
}

/// The resolved location of the orchestrator API, and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: String,
    pub use_ssl: bool,
    pub accept_invalid_certs: bool,
    pub basic_auth: Option<BasicAuth>,
    pub timeout_seconds: u64,
}
