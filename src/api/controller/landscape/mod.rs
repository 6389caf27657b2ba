use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

use crate::api::dto::resource_query_dto::{Lookup, ResourceQuery};
use crate::api::util::json::{missing_parameters, upstream_response};
use crate::app_state::AppState;
use crate::domain::k8s::dto::create_resource_request::CreateResourceRequest;
use crate::errors::AppError;

pub struct LandscapeController;

impl LandscapeController {
    pub async fn get_landscapes(
        State(state): State<AppState>,
        query: ResourceQuery,
    ) -> Result<Response, AppError> {
        match query.lookup() {
            Lookup::Single { namespace, name } => {
                upstream_response(state.landscape_service.get_landscape(namespace, name).await?)
            }
            Lookup::Namespace { namespace } => {
                upstream_response(state.landscape_service.list_landscapes(namespace).await?)
            }
            Lookup::Missing => missing_parameters(),
        }
    }

    pub async fn create_landscape(
        State(state): State<AppState>,
        query: ResourceQuery,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let Some(namespace) = query.namespace() else {
            return missing_parameters();
        };
        let request = CreateResourceRequest::from_body(&body);
        upstream_response(
            state
                .landscape_service
                .create_landscape(namespace, &request)
                .await?,
        )
    }

    pub async fn delete_landscape(
        State(state): State<AppState>,
        query: ResourceQuery,
    ) -> Result<Response, AppError> {
        match query.lookup() {
            Lookup::Single { namespace, name } => {
                upstream_response(state.landscape_service.delete_landscape(namespace, name).await?)
            }
            _ => missing_parameters(),
        }
    }
}
