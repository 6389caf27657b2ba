use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tokio::task;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::applications::application_entity::ApplicationEntity;
use crate::domain::application::application_hooks::ApplicationHooks;
use crate::domain::application::dto::application_descriptor::ApplicationDescriptor;
use crate::errors::AppError;

pub struct ApplicationHookController;

/// The repository does blocking file I/O under a mutex; keep it off the async workers.
async fn run_blocking<T, F>(hooks: ApplicationHooks, op: F) -> Result<anyhow::Result<T>, AppError>
where
    T: Send + 'static,
    F: FnOnce(&ApplicationHooks) -> anyhow::Result<T> + Send + 'static,
{
    task::spawn_blocking(move || op(&hooks))
        .await
        .map_err(|err| AppError::Persistence(err.to_string()))
}

impl ApplicationHookController {
    pub async fn after_create_application(
        State(state): State<AppState>,
        Json(payload): Json<ApplicationDescriptor>,
    ) -> Result<Json<ApiResponse<ApplicationEntity>>, AppError> {
        to_json(
            run_blocking(state.application_hooks, move |hooks| {
                hooks.after_create_application(&payload)
            })
            .await?,
        )
    }

    pub async fn after_delete_application(
        State(state): State<AppState>,
        Path(application_name): Path<String>,
    ) -> Result<StatusCode, AppError> {
        run_blocking(state.application_hooks, move |hooks| {
            hooks.after_delete_application(&application_name)
        })
        .await?
        .map_err(|err| AppError::Persistence(format!("{:#}", err)))?;
        Ok(StatusCode::NO_CONTENT)
    }

    pub async fn list_applications(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<ApplicationEntity>>>, AppError> {
        to_json(run_blocking(state.application_hooks, |hooks| hooks.list_applications()).await?)
    }
}
