pub mod dto;
pub mod manifests;
pub mod workload_service;
