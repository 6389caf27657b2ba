//! Process configuration, read once at startup and passed into the app state.

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use validator::Validate;

pub const DEFAULT_EXTERNAL_IP: &str = "127.0.0.1";
pub const DEFAULT_SERVICE_PORT: i32 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Clone, Validate)]
pub struct AppConfig {
    /// Kubernetes API server URL. `None` means in-cluster / kubeconfig discovery.
    #[validate(url)]
    pub k8s_host: Option<String>,
    /// Bearer token sent with every API server request.
    pub k8s_token: Option<String>,
    /// Accept self-signed API server certificates (minikube and friends).
    pub k8s_insecure: bool,
    /// Externally reachable IP used to build landscape URLs.
    #[validate(ip)]
    pub external_ip: String,
    /// Port exposed by services created for landscapes.
    #[validate(range(min = 1, max = 65535))]
    pub service_port: i32,
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            k8s_host: None,
            k8s_token: None,
            k8s_insecure: false,
            external_ip: DEFAULT_EXTERNAL_IP.to_string(),
            service_port: DEFAULT_SERVICE_PORT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_dir: None,
        }
    }
}

// Keep the token out of logs
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("k8s_host", &self.k8s_host)
            .field("k8s_token", &self.k8s_token.as_ref().map(|_| "<redacted>"))
            .field("k8s_insecure", &self.k8s_insecure)
            .field("external_ip", &self.external_ip)
            .field("service_port", &self.service_port)
            .field("bind_addr", &self.bind_addr)
            .field("data_dir", &self.data_dir)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl AppConfig {
    /// Build from `ZEUS_*` environment variables (a `.env` file is loaded first by `main`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let k8s_insecure = match var("ZEUS_LANDSCAPES_INSECURE") {
            Some(v) => v
                .parse::<bool>()
                .with_context(|| format!("ZEUS_LANDSCAPES_INSECURE must be true or false, got '{}'", v))?,
            None => defaults.k8s_insecure,
        };

        let service_port = match var("ZEUS_SERVICE_PORT") {
            Some(v) => v
                .parse::<i32>()
                .with_context(|| format!("ZEUS_SERVICE_PORT must be a port number, got '{}'", v))?,
            None => defaults.service_port,
        };

        let config = Self {
            k8s_host: var("ZEUS_LANDSCAPES_HOST"),
            k8s_token: var("ZEUS_LANDSCAPES_TOKEN"),
            k8s_insecure,
            external_ip: var("ZEUS_LANDSCAPES_IP").unwrap_or(defaults.external_ip),
            service_port,
            bind_addr: var("ZEUS_BIND_ADDR").unwrap_or(defaults.bind_addr),
            data_dir: var("ZEUS_DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            log_dir: var("ZEUS_LOG_DIR").map(PathBuf::from),
        };

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}
