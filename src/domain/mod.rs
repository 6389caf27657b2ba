pub mod application;
pub mod k8s;
pub mod landscape;
