//! Callbacks run by the application orchestrator after it creates or deletes
//! an application.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::persistence::applications::application_api_repository_trait::ApplicationApiRepository;
use crate::core::persistence::applications::application_entity::ApplicationEntity;
use crate::domain::application::dto::application_descriptor::ApplicationDescriptor;

#[derive(Clone)]
pub struct ApplicationHooks {
    repository: Arc<dyn ApplicationApiRepository>,
}

impl ApplicationHooks {
    pub fn new(repository: Arc<dyn ApplicationApiRepository>) -> Self {
        Self { repository }
    }

    /// Persists the metadata record. Storage errors are returned to the caller as-is.
    pub fn after_create_application(
        &self,
        application: &ApplicationDescriptor,
    ) -> Result<ApplicationEntity> {
        let entity = ApplicationEntity::new(
            application.name.clone(),
            application.application_template_id,
        );
        self.repository.create(&entity)?;

        info!(
            "Recorded application '{}' (template {})",
            entity.application_name, entity.application_template_id
        );
        Ok(entity)
    }

    /// Removes the record for `application_name`; unknown names are a no-op.
    pub fn after_delete_application(&self, application_name: &str) -> Result<()> {
        match self.repository.find_by_name(application_name)? {
            Some(entity) => {
                self.repository.delete(&entity)?;
                info!("Removed application record '{}'", application_name);
            }
            None => debug!("No application record for '{}'", application_name),
        }
        Ok(())
    }

    pub fn list_applications(&self) -> Result<Vec<ApplicationEntity>> {
        self.repository.list()
    }
}
