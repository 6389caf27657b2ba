use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata persisted for an application, independent of cluster state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationEntity {
    pub id: Uuid,
    pub application_name: String,
    pub application_template_id: i64,
    pub created_at: DateTime<Utc>,
}

impl ApplicationEntity {
    pub fn new(application_name: impl Into<String>, application_template_id: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            application_name: application_name.into(),
            application_template_id,
            created_at: Utc::now(),
        }
    }
}
