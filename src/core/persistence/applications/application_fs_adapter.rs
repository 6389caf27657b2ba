use std::{
    fs::{self, File},
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::persistence::storage_path::applications_path;

use super::application_entity::ApplicationEntity;

/// FS adapter for application metadata.
///
/// All records live in a single JSON array written atomically
/// (temp file, fsync, rename).
pub struct ApplicationFsAdapter {
    path: PathBuf,
}

impl ApplicationFsAdapter {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: applications_path(data_dir),
        }
    }

    pub fn read_all(&self) -> Result<Vec<ApplicationEntity>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).context("Failed to open applications file")?;
        let records = serde_json::from_reader(BufReader::new(file))
            .context("Failed to parse applications file")?;
        Ok(records)
    }

    pub fn write_all(&self, records: &[ApplicationEntity]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context("Failed to create applications directory")?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp_path).context("Failed to create temp applications file")?;
        serde_json::to_writer_pretty(&mut f, records)?;
        f.flush()?;
        f.sync_all().context("Failed to sync temp applications file")?;
        fs::rename(&tmp_path, &self.path).context("Failed to finalize applications file")?;

        #[cfg(unix)]
        if let Some(dir) = self.path.parent() {
            let dir_file = File::open(dir).context("Failed to open applications directory")?;
            dir_file.sync_all().context("Failed to sync applications directory")?;
        }

        Ok(())
    }
}
