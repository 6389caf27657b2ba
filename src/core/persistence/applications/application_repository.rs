use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Result};

use super::application_api_repository_trait::ApplicationApiRepository;
use super::application_entity::ApplicationEntity;
use super::application_fs_adapter::ApplicationFsAdapter;

pub struct ApplicationRepository {
    adapter: ApplicationFsAdapter,
    // serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl ApplicationRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            adapter: ApplicationFsAdapter::new(data_dir),
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| anyhow!("applications store lock poisoned"))
    }
}

impl ApplicationApiRepository for ApplicationRepository {
    fn create(&self, entity: &ApplicationEntity) -> Result<()> {
        let _guard = self.guard()?;
        let mut records = self.adapter.read_all()?;
        records.push(entity.clone());
        self.adapter.write_all(&records)
    }

    fn find_by_name(&self, application_name: &str) -> Result<Option<ApplicationEntity>> {
        let _guard = self.guard()?;
        Ok(self
            .adapter
            .read_all()?
            .into_iter()
            .find(|r| r.application_name == application_name))
    }

    fn delete(&self, entity: &ApplicationEntity) -> Result<()> {
        let _guard = self.guard()?;
        let mut records = self.adapter.read_all()?;
        records.retain(|r| r.id != entity.id);
        self.adapter.write_all(&records)
    }

    fn list(&self) -> Result<Vec<ApplicationEntity>> {
        let _guard = self.guard()?;
        self.adapter.read_all()
    }
}
