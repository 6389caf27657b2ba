use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::core::client::kube_resources::{Deployment, Service};
use crate::core::client::upstream::UpstreamResult;

/// Deployment plus the externally reachable URL of its matching service.
#[derive(Debug, Clone, Serialize)]
pub struct LandscapeDeployment {
    #[serde(flatten)]
    pub deployment: Deployment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<Deployment> for LandscapeDeployment {
    fn from(deployment: Deployment) -> Self {
        Self {
            deployment,
            url: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct LandscapeCreation {
    pub deployment: UpstreamResult<Deployment>,
    /// Absent when the deployment could not be created.
    pub service: Option<UpstreamResult<Service>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct LandscapeDeletion {
    pub deployment: UpstreamResult<Value>,
    pub service: Option<UpstreamResult<Value>>,
    /// Result of the last replica set deleted, kept for existing clients.
    pub replicaset: Option<UpstreamResult<Value>>,
    /// Every replica set delete, in the order issued.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replicasets: Vec<UpstreamResult<Value>>,
}
