use anyhow::{Context, Result};
use kube::{Client, Config};
use tracing::debug;

use crate::config::AppConfig;

/// Creates a Kubernetes client for the configured API server, or falls back to
/// in-cluster / kubeconfig discovery when no host is set.
pub async fn build_kube_client(config: &AppConfig) -> Result<Client> {
    let client = if let Some(host) = &config.k8s_host {
        debug!("Using API server from ZEUS_LANDSCAPES_HOST: {}", host);
        let uri: http::Uri = host
            .parse()
            .with_context(|| format!("Invalid Kubernetes API URL '{}'", host))?;

        let mut kube_config = Config::new(uri);
        if let Some(token) = &config.k8s_token {
            kube_config.auth_info.token = Some(token.clone().into());
        }
        kube_config.accept_invalid_certs = config.k8s_insecure;

        Client::try_from(kube_config).context("Failed to build Kubernetes client")?
    } else {
        // Reads the service account token or local kubeconfig
        debug!("Using in-cluster configuration");
        Client::try_default().await?
    };

    debug!("Kubernetes client initialized successfully");
    Ok(client)
}
