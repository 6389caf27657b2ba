//! API route declarations (e.g., /api/v1/*)

pub mod extension_routes;
pub mod k8s_routes;
