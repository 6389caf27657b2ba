use anyhow::Result;
use kube::api::{DeleteParams, ListParams};
use kube::{Api, Client};
use serde_json::Value;
use tracing::debug;

use crate::core::client::kube_resources::ReplicaSet;
use crate::core::client::upstream::UpstreamResult;

/// Fetch replica sets in a specific namespace
pub async fn fetch_replica_sets_by_namespace(
    client: &Client,
    namespace: &str,
) -> Result<UpstreamResult<Vec<ReplicaSet>>> {
    let replica_sets: Api<ReplicaSet> = Api::namespaced(client.clone(), namespace);
    let result = UpstreamResult::from_kube(replica_sets.list(&ListParams::default()).await)?
        .map(|list| list.items);

    if let Some(items) = result.object() {
        debug!(
            "Discovered {} replica set(s) in namespace '{}'",
            items.len(),
            namespace
        );
    }
    Ok(result)
}

pub async fn delete_replica_set(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<UpstreamResult<Value>> {
    let replica_sets: Api<ReplicaSet> = Api::namespaced(client.clone(), namespace);
    let result =
        UpstreamResult::from_kube(replica_sets.delete(name, &DeleteParams::default()).await)?
            .try_map(|deleted| {
                deleted.either(|rs| serde_json::to_value(&rs), |s| serde_json::to_value(&s))
            })?;

    debug!("Deleted replica set: {}/{} ({})", namespace, name, result.status_code);
    Ok(result)
}
