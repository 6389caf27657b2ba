use serde::{Deserialize, Serialize};

/// Application as handed over by the application orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDescriptor {
    pub name: String,
    pub application_template_id: i64,
}
