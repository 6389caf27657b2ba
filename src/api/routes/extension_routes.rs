//! Application lifecycle hook routes, called by the application orchestrator.

use axum::routing::{delete, get};
use axum::Router;

use crate::api::controller::application::ApplicationHookController;
use crate::app_state::AppState;

pub fn extension_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/applications",
            get(ApplicationHookController::list_applications)
                .post(ApplicationHookController::after_create_application),
        )
        .route(
            "/applications/{application_name}",
            delete(ApplicationHookController::after_delete_application),
        )
}
