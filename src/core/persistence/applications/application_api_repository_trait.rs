use anyhow::Result;

use super::application_entity::ApplicationEntity;

/// Storage for application metadata records.
pub trait ApplicationApiRepository: Send + Sync {
    fn create(&self, entity: &ApplicationEntity) -> Result<()>;

    /// First record with the given application name, if any.
    fn find_by_name(&self, application_name: &str) -> Result<Option<ApplicationEntity>>;

    fn delete(&self, entity: &ApplicationEntity) -> Result<()>;

    fn list(&self) -> Result<Vec<ApplicationEntity>>;
}
