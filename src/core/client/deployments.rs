use anyhow::Result;
use kube::api::{DeleteParams, ListParams, PostParams, PropagationPolicy};
use kube::{Api, Client};
use serde_json::Value;
use tracing::debug;

use crate::core::client::kube_resources::Deployment;
use crate::core::client::upstream::UpstreamResult;

/// Fetch a single deployment by name and namespace
pub async fn fetch_deployment_by_name_and_namespace(
    client: &Client,
    namespace: &str,
    deployment_name: &str,
) -> Result<UpstreamResult<Deployment>> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let result = UpstreamResult::from_kube(deployments.get(deployment_name).await)?;

    debug!(
        "Fetched deployment: {}/{} ({})",
        namespace, deployment_name, result.status_code
    );
    Ok(result)
}

/// Fetch deployments in a specific namespace
pub async fn fetch_deployments_by_namespace(
    client: &Client,
    namespace: &str,
) -> Result<UpstreamResult<Vec<Deployment>>> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let result = UpstreamResult::from_kube(deployments.list(&ListParams::default()).await)?
        .map(|list| list.items);

    if let Some(items) = result.object() {
        debug!(
            "Discovered {} deployment(s) in namespace '{}'",
            items.len(),
            namespace
        );
    }
    Ok(result)
}

pub async fn create_deployment(
    client: &Client,
    namespace: &str,
    deployment: &Deployment,
) -> Result<UpstreamResult<Deployment>> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let result =
        UpstreamResult::from_kube(deployments.create(&PostParams::default(), deployment).await)?;

    debug!(
        "Created deployment {:?} in namespace '{}' ({})",
        deployment.metadata.name, namespace, result.status_code
    );
    Ok(result)
}

/// Delete a deployment; the body is the deleted object or the API server's Status.
pub async fn delete_deployment(
    client: &Client,
    namespace: &str,
    deployment_name: &str,
    propagation: PropagationPolicy,
) -> Result<UpstreamResult<Value>> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let params = DeleteParams {
        propagation_policy: Some(propagation),
        ..DeleteParams::default()
    };
    let result = UpstreamResult::from_kube(deployments.delete(deployment_name, &params).await)?
        .try_map(|deleted| {
            deleted.either(|d| serde_json::to_value(&d), |s| serde_json::to_value(&s))
        })?;

    debug!(
        "Deleted deployment: {}/{} ({})",
        namespace, deployment_name, result.status_code
    );
    Ok(result)
}
