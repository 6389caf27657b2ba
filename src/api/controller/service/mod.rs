use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

use crate::api::dto::resource_query_dto::{Lookup, ResourceQuery};
use crate::api::util::json::{missing_parameters, upstream_response};
use crate::app_state::AppState;
use crate::domain::k8s::dto::create_resource_request::CreateResourceRequest;
use crate::errors::AppError;

pub struct ServiceController;

impl ServiceController {
    pub async fn get_services(
        State(state): State<AppState>,
        query: ResourceQuery,
    ) -> Result<Response, AppError> {
        match query.lookup() {
            Lookup::Single { namespace, name } => {
                upstream_response(state.cluster.get_service(namespace, name).await?)
            }
            Lookup::Namespace { namespace } => {
                upstream_response(state.cluster.list_services(namespace).await?)
            }
            Lookup::Missing => missing_parameters(),
        }
    }

    /// Only `name` is taken from the body.
    pub async fn create_service(
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
                .workload_service
                .create_service(namespace, request.name.as_deref())
                .await?,
        )
    }

    pub async fn delete_service(
        State(state): State<AppState>,
        query: ResourceQuery,
    ) -> Result<Response, AppError> {
        match query.lookup() {
            Lookup::Single { namespace, name } => {
                upstream_response(state.cluster.delete_service(namespace, name).await?)
            }
            _ => missing_parameters(),
        }
    }
}
