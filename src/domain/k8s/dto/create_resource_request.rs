use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /deployments`, `/services` and `/landscapes`.
///
/// Nothing is validated here; the API server rejects what it does not accept.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateResourceRequest {
    pub name: Option<String>,
    pub replicas: Option<i32>,
    pub image: Option<String>,
    pub env: Option<EnvSpec>,
}

/// Environment variables either as `[{name, value}]` or as a `{NAME: value}` map.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EnvSpec {
    List(Vec<EnvEntry>),
    Map(BTreeMap<String, Value>),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EnvEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<Value>,
}

impl CreateResourceRequest {
    /// A missing or malformed body reads as an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// `(name, value)` pairs in request order; non-string values are rendered as JSON.
    pub fn env_pairs(&self) -> Vec<(String, Option<String>)> {
        match &self.env {
            None => Vec::new(),
            Some(EnvSpec::List(entries)) => entries
                .iter()
                .map(|e| (e.name.clone(), e.value.as_ref().map(value_to_string)))
                .collect(),
            Some(EnvSpec::Map(map)) => map
                .iter()
                .map(|(k, v)| (k.clone(), Some(value_to_string(v))))
                .collect(),
        }
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
