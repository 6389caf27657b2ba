use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower::{Layer, ServiceExt};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // Deployments, services, landscapes
        .nest("/api/v1", crate::api::routes::k8s_routes::k8s_routes())
        // Application lifecycle hooks
        .nest("/extensions", crate::api::routes::extension_routes::extension_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors))
}

// Permissive CORS. An OPTIONS request without Access-Control-Request-Method is
// not a preflight and is left to the method routers.
async fn cors(request: Request, next: Next) -> Response {
    let preflight = request
        .headers()
        .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);
    if request.method() == Method::OPTIONS && !preflight {
        return next.run(request).await;
    }

    match CorsLayer::very_permissive().layer(next).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    }
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
