use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::client::cluster_api::ClusterApi;
use crate::core::persistence::applications::application_api_repository_trait::ApplicationApiRepository;
use crate::domain::application::application_hooks::ApplicationHooks;
use crate::domain::k8s::workload_service::WorkloadService;
use crate::domain::landscape::landscape_service::LandscapeService;

#[derive(Clone)]
pub struct AppState {
    pub cluster: Arc<dyn ClusterApi>,
    pub workload_service: WorkloadService,
    pub landscape_service: LandscapeService,
    pub application_hooks: ApplicationHooks,
}

pub fn build_app_state(
    config: &AppConfig,
    cluster: Arc<dyn ClusterApi>,
    repository: Arc<dyn ApplicationApiRepository>,
) -> AppState {
    let workload_service = WorkloadService::new(cluster.clone(), config.service_port);
    let landscape_service = LandscapeService::new(
        cluster.clone(),
        workload_service.clone(),
        config.external_ip.clone(),
    );

    AppState {
        cluster,
        workload_service,
        landscape_service,
        application_hooks: ApplicationHooks::new(repository),
    }
}
