//! Tagged result returned by every upstream Kubernetes operation.

use serde::{Deserialize, Serialize, Serializer};

pub const STATUS_OK: u16 = 200;

/// Kubernetes-style failure object, `{status, message, reason, code}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureStatus {
    pub status: String,
    pub message: String,
    pub reason: String,
    pub code: u16,
}

impl FailureStatus {
    pub fn new(code: u16, reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: "Failure".to_string(),
            message: message.into(),
            reason: reason.into(),
            code,
        }
    }

    /// Body returned when `namespace` (and `name` where needed) are absent.
    pub fn missing_parameters() -> Self {
        Self::new(400, "BadRequest", "Missing required query parameters")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UpstreamBody<T> {
    Object(T),
    Failure(FailureStatus),
}

/// Status code plus body of one upstream call (or of an aggregate of several).
///
/// Serializes as the body alone so callers can pass upstream JSON through untouched.
#[derive(Debug, Clone)]
pub struct UpstreamResult<T> {
    pub status_code: u16,
    pub body: UpstreamBody<T>,
}

pub fn is_success_code(code: u16) -> bool {
    (200..300).contains(&code)
}

impl<T> UpstreamResult<T> {
    pub fn ok(value: T) -> Self {
        Self::with_status(STATUS_OK, value)
    }

    /// Used by aggregates whose status is derived from several upstream calls.
    pub fn with_status(status_code: u16, value: T) -> Self {
        Self {
            status_code,
            body: UpstreamBody::Object(value),
        }
    }

    pub fn failure(failure: FailureStatus) -> Self {
        Self {
            status_code: failure.code,
            body: UpstreamBody::Failure(failure),
        }
    }

    /// Captures API server rejections as failures; transport errors stay errors.
    pub fn from_kube(result: Result<T, kube::Error>) -> Result<Self, kube::Error> {
        match result {
            Ok(value) => Ok(Self::ok(value)),
            Err(kube::Error::Api(response)) => Ok(Self::failure(FailureStatus::new(
                response.code,
                response.reason.clone(),
                response.message.clone(),
            ))),
            Err(err) => Err(err),
        }
    }

    pub fn is_success(&self) -> bool {
        is_success_code(self.status_code)
    }

    pub fn object(&self) -> Option<&T> {
        match &self.body {
            UpstreamBody::Object(value) => Some(value),
            UpstreamBody::Failure(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> UpstreamResult<U> {
        UpstreamResult {
            status_code: self.status_code,
            body: match self.body {
                UpstreamBody::Object(value) => UpstreamBody::Object(f(value)),
                UpstreamBody::Failure(failure) => UpstreamBody::Failure(failure),
            },
        }
    }

    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<UpstreamResult<U>, E> {
        let body = match self.body {
            UpstreamBody::Object(value) => UpstreamBody::Object(f(value)?),
            UpstreamBody::Failure(failure) => UpstreamBody::Failure(failure),
        };
        Ok(UpstreamResult {
            status_code: self.status_code,
            body,
        })
    }
}

impl<T: Serialize> Serialize for UpstreamResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_parameters_body_is_fixed() {
        let body = serde_json::to_value(FailureStatus::missing_parameters()).unwrap();
        assert_eq!(
            body,
            json!({
                "status": "Failure",
                "message": "Missing required query parameters",
                "reason": "BadRequest",
                "code": 400
            })
        );
    }

    #[test]
    fn serializes_body_only() {
        let ok = UpstreamResult::ok(json!({"metadata": {"name": "app1"}}));
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"metadata": {"name": "app1"}}));

        let failed: UpstreamResult<serde_json::Value> =
            UpstreamResult::failure(FailureStatus::new(404, "NotFound", "deployments \"x\" not found"));
        let body = serde_json::to_value(&failed).unwrap();
        assert_eq!(body["code"], 404);
        assert_eq!(body["reason"], "NotFound");
        assert_eq!(failed.status_code, 404);
        assert!(!failed.is_success());
    }

    #[test]
    fn map_keeps_failure_and_status() {
        let failed: UpstreamResult<Vec<u8>> =
            UpstreamResult::failure(FailureStatus::new(403, "Forbidden", "nope"));
        let mapped = failed.map(|items| items.len());
        assert_eq!(mapped.status_code, 403);
        assert!(mapped.object().is_none());

        let mapped = UpstreamResult::ok(vec![1u8, 2, 3]).map(|items| items.len());
        assert_eq!(mapped.object(), Some(&3));
        assert!(mapped.is_success());
    }
}
