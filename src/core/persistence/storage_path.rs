use std::path::{Path, PathBuf};

pub const APPLICATIONS_FILE: &str = "applications.json";

/// Location of the persisted application metadata records.
pub fn applications_path(data_dir: &Path) -> PathBuf {
    data_dir.join(APPLICATIONS_FILE)
}
