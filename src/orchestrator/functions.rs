//! The impls and functions
//!
use std::time::{Duration, Instant};
use log::*;
use anyhow::{Context, Result};
use crate::utility;
use crate::orchestrator::{BasicAuth, Endpoint, OrchestratorOpts, DEFAULT_HOST, DEFAULT_HTTP_TIMEOUT, DEFAULT_PORT};

impl Default for OrchestratorOpts {
    fn default() -> Self {
        OrchestratorOpts {
            host: None,
            port: None,
            ssl: false,
            insecure: false,
            http_auth_name: None,
            http_auth_pass: None,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl OrchestratorOpts {
    /// Resolve the options into an [Endpoint], using `.env` and the defaults for the options not set.
    pub fn endpoint(&self) -> Endpoint
    {
        let host = utility::set_option(&self.host, "ORCHESTRATOR_HOST", DEFAULT_HOST);
        let port = utility::set_option(&self.port, "ORCHESTRATOR_PORT", DEFAULT_PORT);
        let name = utility::set_optional_secret(&self.http_auth_name, "ORCHESTRATOR_HTTP_AUTH_NAME");
        let password = utility::set_optional_secret(&self.http_auth_pass, "ORCHESTRATOR_HTTP_AUTH_PASS");

        // basic authentication is only used if both the name and the password are set.
        let basic_auth = match (name, password) {
            (Some(name), Some(password)) => Some(BasicAuth { name, password }),
            (None, None) => None,
            _ => {
                warn!("only one of http auth name and http auth pass is set: not using basic authentication");
                None
            }
        };

        Endpoint {
            host,
            port,
            use_ssl: self.ssl,
            accept_invalid_certs: self.insecure,
            basic_auth,
            timeout_seconds: self.http_timeout,
        }
    }
}

impl Endpoint {
    pub fn scheme(&self) -> &'static str {
        if self.use_ssl { "https" } else { "http" }
    }
    /// The full url for a path, a leading slash of the path is ignored.
    pub fn url(
        &self,
        path: &str,
    ) -> String
    {
        format!("{}://{}:{}/{}", self.scheme(), self.host, self.port, path.trim_start_matches('/'))
    }
    /// Perform a single GET request on path, and return the complete body.
    ///
    /// The body is returned for any HTTP status: the orchestrator returns its status responses
    /// with non-success codes too, so these are classified by the caller.
    pub fn http_get(
        &self,
        path: &str,
    ) -> Result<Vec<u8>>
    {
        let url = self.url(path);
        info!("begin http get: {}", url);
        let timer = Instant::now();

        if self.accept_invalid_certs {
            warn!("certificate verification is disabled for {}:{}", self.host, self.port);
        }

        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .build()
            .with_context(|| "Error building the http client")?;

        let mut request = client.get(&url);
        if let Some(basic_auth) = &self.basic_auth {
            debug!("using basic authentication as user {}", basic_auth.name);
            request = request.basic_auth(&basic_auth.name, Some(&basic_auth.password));
        }

        let response = request
            .send()
            .with_context(|| "Error requesting")?;

        if !response.status().is_success() {
            debug!("Non success response: {} = {}", url, response.status());
        } else {
            debug!("Success response: {} = {}", url, response.status());
        }

        let body = response
            .bytes()
            .with_context(|| "Error reading the response body")?;

        info!("end http get: {} bytes, {:?}", body.len(), timer.elapsed());

        Ok(body.to_vec())
    }
}
