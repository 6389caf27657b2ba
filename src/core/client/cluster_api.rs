use anyhow::Result;
use async_trait::async_trait;
use kube::api::PropagationPolicy;
use kube::Client;
use serde_json::Value;

use crate::core::client::kube_resources::{Deployment, ReplicaSet, Service};
use crate::core::client::upstream::UpstreamResult;
use crate::core::client::{deployments, replicasets, services};

/// Upstream Kubernetes operations used by the HTTP handlers.
///
/// API server rejections come back as failed [`UpstreamResult`]s; only
/// transport-level problems surface as `Err`.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn get_deployment(&self, namespace: &str, name: &str)
        -> Result<UpstreamResult<Deployment>>;

    async fn list_deployments(&self, namespace: &str) -> Result<UpstreamResult<Vec<Deployment>>>;

    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: Deployment,
    ) -> Result<UpstreamResult<Deployment>>;

    async fn delete_deployment(
        &self,
        namespace: &str,
        name: &str,
        propagation: PropagationPolicy,
    ) -> Result<UpstreamResult<Value>>;

    async fn get_service(&self, namespace: &str, name: &str) -> Result<UpstreamResult<Service>>;

    async fn list_services(&self, namespace: &str) -> Result<UpstreamResult<Vec<Service>>>;

    async fn create_service(&self, namespace: &str, service: Service)
        -> Result<UpstreamResult<Service>>;

    async fn delete_service(&self, namespace: &str, name: &str) -> Result<UpstreamResult<Value>>;

    async fn list_replica_sets(&self, namespace: &str) -> Result<UpstreamResult<Vec<ReplicaSet>>>;

    async fn delete_replica_set(&self, namespace: &str, name: &str)
        -> Result<UpstreamResult<Value>>;
}

/// [`ClusterApi`] backed by a live `kube::Client`.
#[derive(Clone)]
pub struct KubeClusterApi {
    client: Client,
}

impl KubeClusterApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterApi for KubeClusterApi {
    async fn get_deployment(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<UpstreamResult<Deployment>> {
        deployments::fetch_deployment_by_name_and_namespace(&self.client, namespace, name).await
    }

    async fn list_deployments(&self, namespace: &str) -> Result<UpstreamResult<Vec<Deployment>>> {
        deployments::fetch_deployments_by_namespace(&self.client, namespace).await
    }

    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: Deployment,
    ) -> Result<UpstreamResult<Deployment>> {
        deployments::create_deployment(&self.client, namespace, &deployment).await
    }

    async fn delete_deployment(
        &self,
        namespace: &str,
        name: &str,
        propagation: PropagationPolicy,
    ) -> Result<UpstreamResult<Value>> {
        deployments::delete_deployment(&self.client, namespace, name, propagation).await
    }

    async fn get_service(&self, namespace: &str, name: &str) -> Result<UpstreamResult<Service>> {
        services::fetch_service_by_name_and_namespace(&self.client, namespace, name).await
    }

    async fn list_services(&self, namespace: &str) -> Result<UpstreamResult<Vec<Service>>> {
        services::fetch_services_by_namespace(&self.client, namespace).await
    }

    async fn create_service(
        &self,
        namespace: &str,
        service: Service,
    ) -> Result<UpstreamResult<Service>> {
        services::create_service(&self.client, namespace, &service).await
    }

    async fn delete_service(&self, namespace: &str, name: &str) -> Result<UpstreamResult<Value>> {
        services::delete_service(&self.client, namespace, name).await
    }

    async fn list_replica_sets(&self, namespace: &str) -> Result<UpstreamResult<Vec<ReplicaSet>>> {
        replicasets::fetch_replica_sets_by_namespace(&self.client, namespace).await
    }

    async fn delete_replica_set(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<UpstreamResult<Value>> {
        replicasets::delete_replica_set(&self.client, namespace, name).await
    }
}
