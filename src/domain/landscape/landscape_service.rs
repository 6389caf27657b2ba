//! Landscapes: a deployment joined with the service of the same name.

use std::sync::Arc;

use anyhow::Result;
use kube::api::PropagationPolicy;
use tracing::{info, warn};

use crate::core::client::cluster_api::ClusterApi;
use crate::core::client::kube_resources::{ReplicaSet, Service};
use crate::core::client::upstream::{is_success_code, UpstreamBody, UpstreamResult};
use crate::domain::k8s::dto::create_resource_request::CreateResourceRequest;
use crate::domain::k8s::manifests::APPLICATION_LABEL;
use crate::domain::k8s::workload_service::WorkloadService;
use crate::domain::landscape::dto::{LandscapeCreation, LandscapeDeletion, LandscapeDeployment};

#[derive(Clone)]
pub struct LandscapeService {
    cluster: Arc<dyn ClusterApi>,
    workloads: WorkloadService,
    external_ip: String,
}

impl LandscapeService {
    pub fn new(cluster: Arc<dyn ClusterApi>, workloads: WorkloadService, external_ip: String) -> Self {
        Self {
            cluster,
            workloads,
            external_ip,
        }
    }

    /// `<external ip>:<node port of the first service port>`
    fn node_url(&self, service: &Service) -> Option<String> {
        let node_port = service.spec.as_ref()?.ports.as_ref()?.first()?.node_port?;
        Some(format!("{}:{}", self.external_ip, node_port))
    }

    pub async fn get_landscape(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<UpstreamResult<LandscapeDeployment>> {
        let deployment = self.cluster.get_deployment(namespace, name).await?;
        let service = self.cluster.get_service(namespace, name).await?;

        let url = service.object().and_then(|svc| self.node_url(svc));
        Ok(deployment.map(|deployment| LandscapeDeployment { deployment, url }))
    }

    pub async fn list_landscapes(
        &self,
        namespace: &str,
    ) -> Result<UpstreamResult<Vec<LandscapeDeployment>>> {
        let deployments = match self.cluster.list_deployments(namespace).await?.body {
            UpstreamBody::Object(items) => items,
            UpstreamBody::Failure(failure) => return Ok(UpstreamResult::failure(failure)),
        };
        let services = match self.cluster.list_services(namespace).await?.body {
            UpstreamBody::Object(items) => items,
            UpstreamBody::Failure(failure) => return Ok(UpstreamResult::failure(failure)),
        };

        let mut landscapes: Vec<LandscapeDeployment> =
            deployments.into_iter().map(LandscapeDeployment::from).collect();

        // services x deployments; a later service with the same name overwrites the url
        for service in &services {
            let Some(service_name) = service.metadata.name.as_deref() else {
                continue;
            };
            let Some(url) = self.node_url(service) else {
                continue;
            };
            for landscape in landscapes
                .iter_mut()
                .filter(|l| l.deployment.metadata.name.as_deref() == Some(service_name))
            {
                landscape.url = Some(url.clone());
            }
        }

        Ok(UpstreamResult::ok(landscapes))
    }

    /// Deployment first; the service is only created once the deployment exists.
    pub async fn create_landscape(
        &self,
        namespace: &str,
        request: &CreateResourceRequest,
    ) -> Result<UpstreamResult<LandscapeCreation>> {
        let deployment = self.workloads.create_deployment(namespace, request).await?;
        if !deployment.is_success() {
            let status = deployment.status_code;
            return Ok(UpstreamResult::with_status(
                status,
                LandscapeCreation {
                    deployment,
                    service: None,
                },
            ));
        }

        let service = self
            .workloads
            .create_service(namespace, request.name.as_deref())
            .await?;
        let status = service.status_code;

        Ok(UpstreamResult::with_status(
            status,
            LandscapeCreation {
                deployment,
                service: Some(service),
            },
        ))
    }

    /// Deletes the deployment, its service and every replica set labelled with
    /// the application name. Nothing is rolled back; the reported status is the
    /// first non-OK status seen.
    pub async fn delete_landscape(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<UpstreamResult<LandscapeDeletion>> {
        // Orphan so the replica sets are still there for the explicit cascade below
        let deployment = self
            .cluster
            .delete_deployment(namespace, name, PropagationPolicy::Orphan)
            .await?;
        let mut status = deployment.status_code;
        let mut deletion = LandscapeDeletion {
            deployment,
            service: None,
            replicaset: None,
            replicasets: Vec::new(),
        };

        if !is_success_code(status) {
            warn!(
                "Landscape {}/{}: deployment delete failed ({}), skipping service and replica sets",
                namespace, name, status
            );
            return Ok(UpstreamResult::with_status(status, deletion));
        }

        let service = self.cluster.delete_service(namespace, name).await?;
        if !service.is_success() {
            warn!(
                "Landscape {}/{}: service delete failed ({})",
                namespace, name, service.status_code
            );
        }
        status = service.status_code;
        deletion.service = Some(service);

        match self.cluster.list_replica_sets(namespace).await?.body {
            UpstreamBody::Object(replica_sets) => {
                for rs_name in replica_sets.iter().filter_map(|rs| owned_replica_set(rs, name)) {
                    let result = self.cluster.delete_replica_set(namespace, rs_name).await?;
                    if !result.is_success() {
                        warn!(
                            "Landscape {}/{}: replica set {} delete failed ({})",
                            namespace, name, rs_name, result.status_code
                        );
                    }
                    if is_success_code(status) {
                        status = result.status_code;
                    }
                    deletion.replicasets.push(result);
                }
            }
            UpstreamBody::Failure(failure) => {
                warn!(
                    "Landscape {}/{}: listing replica sets failed ({})",
                    namespace, name, failure.code
                );
                if is_success_code(status) {
                    status = failure.code;
                }
            }
        }
        deletion.replicaset = deletion.replicasets.last().cloned();

        info!(
            "Deleted landscape {}/{} ({} replica set(s)) -> {}",
            namespace,
            name,
            deletion.replicasets.len(),
            status
        );
        Ok(UpstreamResult::with_status(status, deletion))
    }
}

/// Name of the replica set when it carries `application=<name>`.
fn owned_replica_set<'a>(replica_set: &'a ReplicaSet, application: &str) -> Option<&'a str> {
    let labels = replica_set.metadata.labels.as_ref()?;
    if labels.get(APPLICATION_LABEL).map(String::as_str) != Some(application) {
        return None;
    }
    replica_set.metadata.name.as_deref()
}
