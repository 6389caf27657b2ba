#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use k8s_openapi::api::apps::v1::{Deployment, ReplicaSet};
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::PropagationPolicy;
use serde_json::{json, Value};
use tempfile::TempDir;

use zeus_landscapes::app_state::build_app_state;
use zeus_landscapes::config::AppConfig;
use zeus_landscapes::core::client::cluster_api::ClusterApi;
use zeus_landscapes::core::client::upstream::{FailureStatus, UpstreamResult};
use zeus_landscapes::core::persistence::applications::application_repository::ApplicationRepository;
use zeus_landscapes::routes::app_router;

/// In-memory cluster; every call is recorded as `"<operation> <name>"`.
#[derive(Default)]
pub struct MockCluster {
    pub deployments: Vec<Deployment>,
    pub services: Vec<Service>,
    pub replica_sets: Vec<ReplicaSet>,
    pub deployment_list_status: Option<u16>,
    pub service_list_status: Option<u16>,
    pub service_delete_status: Option<u16>,
    pub replica_set_list_status: Option<u16>,
    pub calls: Mutex<Vec<String>>,
}

impl MockCluster {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn not_found(name: &str) -> FailureStatus {
    FailureStatus::new(404, "NotFound", format!("\"{}\" not found", name))
}

fn upstream_failure(code: u16) -> FailureStatus {
    FailureStatus::new(code, "InternalError", "boom")
}

fn listed<T: Clone>(status: Option<u16>, items: &[T]) -> UpstreamResult<Vec<T>> {
    match status {
        Some(code) => UpstreamResult::failure(upstream_failure(code)),
        None => UpstreamResult::ok(items.to_vec()),
    }
}

fn meta(name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some("ns1".to_string()),
        ..ObjectMeta::default()
    }
}

pub fn deployment(name: &str) -> Deployment {
    Deployment {
        metadata: meta(name),
        ..Deployment::default()
    }
}

pub fn service(name: &str, node_port: i32) -> Service {
    Service {
        metadata: meta(name),
        spec: Some(ServiceSpec {
            ports: Some(vec![ServicePort {
                port: 8080,
                node_port: Some(node_port),
                ..ServicePort::default()
            }]),
            ..ServiceSpec::default()
        }),
        ..Service::default()
    }
}

pub fn replica_set(name: &str, application: &str) -> ReplicaSet {
    let mut metadata = meta(name);
    metadata.labels = Some(BTreeMap::from([(
        "application".to_string(),
        application.to_string(),
    )]));
    ReplicaSet {
        metadata,
        ..ReplicaSet::default()
    }
}

#[async_trait]
impl ClusterApi for MockCluster {
    async fn get_deployment(&self, _namespace: &str, name: &str) -> Result<UpstreamResult<Deployment>> {
        self.record(format!("get_deployment {}", name));
        Ok(self
            .deployments
            .iter()
            .find(|d| d.metadata.name.as_deref() == Some(name))
            .cloned()
            .map(UpstreamResult::ok)
            .unwrap_or_else(|| UpstreamResult::failure(not_found(name))))
    }

    async fn list_deployments(&self, _namespace: &str) -> Result<UpstreamResult<Vec<Deployment>>> {
        self.record("list_deployments".to_string());
        Ok(listed(self.deployment_list_status, &self.deployments))
    }

    async fn create_deployment(
        &self,
        _namespace: &str,
        deployment: Deployment,
    ) -> Result<UpstreamResult<Deployment>> {
        self.record(format!(
            "create_deployment {}",
            deployment.metadata.name.clone().unwrap_or_default()
        ));
        Ok(UpstreamResult::ok(deployment))
    }

    async fn delete_deployment(
        &self,
        _namespace: &str,
        name: &str,
        _propagation: PropagationPolicy,
    ) -> Result<UpstreamResult<Value>> {
        self.record(format!("delete_deployment {}", name));
        Ok(UpstreamResult::ok(json!({ "kind": "Deployment", "metadata": { "name": name } })))
    }

    async fn get_service(&self, _namespace: &str, name: &str) -> Result<UpstreamResult<Service>> {
        self.record(format!("get_service {}", name));
        Ok(self
            .services
            .iter()
            .find(|s| s.metadata.name.as_deref() == Some(name))
            .cloned()
            .map(UpstreamResult::ok)
            .unwrap_or_else(|| UpstreamResult::failure(not_found(name))))
    }

    async fn list_services(&self, _namespace: &str) -> Result<UpstreamResult<Vec<Service>>> {
        self.record("list_services".to_string());
        Ok(listed(self.service_list_status, &self.services))
    }

    async fn create_service(&self, _namespace: &str, service: Service) -> Result<UpstreamResult<Service>> {
        self.record(format!(
            "create_service {}",
            service.metadata.name.clone().unwrap_or_default()
        ));
        Ok(UpstreamResult::ok(service))
    }

    async fn delete_service(&self, _namespace: &str, name: &str) -> Result<UpstreamResult<Value>> {
        self.record(format!("delete_service {}", name));
        Ok(match self.service_delete_status {
            Some(code) => UpstreamResult::failure(upstream_failure(code)),
            None => UpstreamResult::ok(json!({ "kind": "Service", "metadata": { "name": name } })),
        })
    }

    async fn list_replica_sets(&self, _namespace: &str) -> Result<UpstreamResult<Vec<ReplicaSet>>> {
        self.record("list_replica_sets".to_string());
        Ok(listed(self.replica_set_list_status, &self.replica_sets))
    }

    async fn delete_replica_set(&self, _namespace: &str, name: &str) -> Result<UpstreamResult<Value>> {
        self.record(format!("delete_replica_set {}", name));
        Ok(UpstreamResult::ok(json!({ "kind": "ReplicaSet", "metadata": { "name": name } })))
    }
}

pub struct TestApp {
    pub router: Router,
    pub cluster: Arc<MockCluster>,
    // dropped with the app
    pub data_dir: TempDir,
}

pub fn spawn_app(cluster: MockCluster) -> TestApp {
    let data_dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig {
        external_ip: "10.0.0.5".to_string(),
        data_dir: data_dir.path().to_path_buf(),
        ..AppConfig::default()
    };

    let cluster = Arc::new(cluster);
    let repository = Arc::new(ApplicationRepository::new(&config.data_dir));
    let state = build_app_state(&config, cluster.clone(), repository);

    TestApp {
        router: app_router().with_state(state),
        cluster,
        data_dir,
    }
}

pub fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
