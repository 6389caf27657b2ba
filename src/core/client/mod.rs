// Kube-rs based Kubernetes client
pub mod kube_client;
pub mod kube_resources;
pub mod upstream;
pub mod cluster_api;
pub mod deployments;
pub mod services;
pub mod replicasets;
