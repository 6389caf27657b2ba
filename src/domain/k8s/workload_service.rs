use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::core::client::cluster_api::ClusterApi;
use crate::core::client::kube_resources::{Deployment, Service};
use crate::core::client::upstream::UpstreamResult;
use crate::domain::k8s::dto::create_resource_request::CreateResourceRequest;
use crate::domain::k8s::manifests::{build_deployment, build_service};

/// Creates deployments and services from request bodies.
#[derive(Clone)]
pub struct WorkloadService {
    cluster: Arc<dyn ClusterApi>,
    service_port: i32,
}

impl WorkloadService {
    pub fn new(cluster: Arc<dyn ClusterApi>, service_port: i32) -> Self {
        Self {
            cluster,
            service_port,
        }
    }

    pub async fn create_deployment(
        &self,
        namespace: &str,
        request: &CreateResourceRequest,
    ) -> Result<UpstreamResult<Deployment>> {
        let deployment = build_deployment(request, self.service_port);
        let result = self.cluster.create_deployment(namespace, deployment).await?;

        info!(
            "Create deployment {:?} in '{}' -> {}",
            request.name, namespace, result.status_code
        );
        Ok(result)
    }

    pub async fn create_service(
        &self,
        namespace: &str,
        name: Option<&str>,
    ) -> Result<UpstreamResult<Service>> {
        let service = build_service(name, self.service_port);
        let result = self.cluster.create_service(namespace, service).await?;

        info!(
            "Create service {:?} in '{}' -> {}",
            name, namespace, result.status_code
        );
        Ok(result)
    }
}
