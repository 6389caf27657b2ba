use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::api::dto::ApiResponse;
use crate::core::client::upstream::{FailureStatus, UpstreamResult};
use crate::errors::{dispatch_error, AppError};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

pub fn to_json<T: Serialize>(result: Result<T>) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => Err(AppError::Persistence(format!("{:#}", err))),
    }
}

/// Serialize `body` with the status given and the service-wide JSON content type.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, AppError> {
    let bytes = serde_json::to_vec(body).map_err(dispatch_error)?;
    Ok((status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], bytes).into_response())
}

/// Upstream JSON with the upstream status; unknown codes become 502.
pub fn upstream_response<T: Serialize>(result: UpstreamResult<T>) -> Result<Response, AppError> {
    let status = StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::BAD_GATEWAY);
    json_response(status, &result)
}

pub fn missing_parameters() -> Result<Response, AppError> {
    json_response(StatusCode::BAD_REQUEST, &FailureStatus::missing_parameters())
}

pub fn empty_response(status: StatusCode) -> Response {
    (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)]).into_response()
}
