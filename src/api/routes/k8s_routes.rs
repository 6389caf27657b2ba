//! Kubernetes resource routes. Each resource dispatches on the HTTP method and
//! addresses objects through `?namespace=&name=`.
//!
//! HEAD is registered explicitly, otherwise axum would run the GET handler for it.

use axum::routing::get;
use axum::Router;

use crate::api::controller::deployment::DeploymentController;
use crate::api::controller::landscape::LandscapeController;
use crate::api::controller::service::ServiceController;
use crate::api::controller::{method_not_allowed, not_implemented};
use crate::app_state::AppState;

pub fn k8s_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/deployments",
            get(DeploymentController::get_deployments)
                .head(method_not_allowed)
                .post(DeploymentController::create_deployment)
                .put(not_implemented)
                .delete(DeploymentController::delete_deployment)
                .fallback(method_not_allowed),
        )
        .route(
            "/services",
            get(ServiceController::get_services)
                .head(method_not_allowed)
                .post(ServiceController::create_service)
                .put(not_implemented)
                .delete(ServiceController::delete_service)
                .fallback(method_not_allowed),
        )
        .route(
            "/landscapes",
            get(LandscapeController::get_landscapes)
                .head(method_not_allowed)
                .post(LandscapeController::create_landscape)
                .put(not_implemented)
                .delete(LandscapeController::delete_landscape)
                .fallback(method_not_allowed),
        )
}
