//! HTTP controllers: connect routes to the domain and the cluster API

pub mod application;
pub mod deployment;
pub mod landscape;
pub mod service;

use axum::http::StatusCode;
use axum::response::Response;

use crate::api::util::json::empty_response;

/// PUT is accepted by every resource route but has no behaviour behind it.
pub async fn not_implemented() -> Response {
    empty_response(StatusCode::NOT_IMPLEMENTED)
}

pub async fn method_not_allowed() -> Response {
    empty_response(StatusCode::METHOD_NOT_ALLOWED)
}
