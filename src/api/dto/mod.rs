pub mod resource_query_dto;

use serde::Serialize;

/// Envelope for the non-Kubernetes endpoints (application hooks).
#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
