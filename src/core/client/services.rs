use anyhow::Result;
use kube::api::{DeleteParams, ListParams, PostParams};
use kube::{Api, Client};
use serde_json::Value;
use tracing::debug;

use crate::core::client::kube_resources::Service;
use crate::core::client::upstream::UpstreamResult;

/// Fetch a single service by name and namespace
pub async fn fetch_service_by_name_and_namespace(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<UpstreamResult<Service>> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);
    let result = UpstreamResult::from_kube(services.get(name).await)?;

    debug!("Fetched service: {}/{} ({})", namespace, name, result.status_code);
    Ok(result)
}

/// Fetch services in a specific namespace
pub async fn fetch_services_by_namespace(
    client: &Client,
    namespace: &str,
) -> Result<UpstreamResult<Vec<Service>>> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);
    let result = UpstreamResult::from_kube(services.list(&ListParams::default()).await)?
        .map(|list| list.items);

    if let Some(items) = result.object() {
        debug!(
            "Discovered {} service(s) in namespace '{}'",
            items.len(),
            namespace
        );
    }
    Ok(result)
}

pub async fn create_service(
    client: &Client,
    namespace: &str,
    service: &Service,
) -> Result<UpstreamResult<Service>> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);
    let result = UpstreamResult::from_kube(services.create(&PostParams::default(), service).await)?;

    debug!(
        "Created service {:?} in namespace '{}' ({})",
        service.metadata.name, namespace, result.status_code
    );
    Ok(result)
}

pub async fn delete_service(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<UpstreamResult<Value>> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);
    let result = UpstreamResult::from_kube(services.delete(name, &DeleteParams::default()).await)?
        .try_map(|deleted| {
            deleted.either(|svc| serde_json::to_value(&svc), |s| serde_json::to_value(&s))
        })?;

    debug!("Deleted service: {}/{} ({})", namespace, name, result.status_code);
    Ok(result)
}
