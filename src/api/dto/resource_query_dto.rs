//! Query string shared by the deployments, services and landscapes endpoints.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
pub struct ResourceQuery {
    pub namespace: Option<String>,
    pub name: Option<String>,
}

/// What a GET / DELETE addresses.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    Single { namespace: &'a str, name: &'a str },
    Namespace { namespace: &'a str },
    Missing,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ResourceQuery {
    pub fn namespace(&self) -> Option<&str> {
        non_empty(&self.namespace)
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn lookup(&self) -> Lookup<'_> {
        match (self.namespace(), self.name()) {
            (Some(namespace), Some(name)) => Lookup::Single { namespace, name },
            (Some(namespace), None) => Lookup::Namespace { namespace },
            (None, _) => Lookup::Missing,
        }
    }
}

/// A query string that does not decode (e.g. a repeated `namespace`) reads as
/// empty, so the handler answers with the missing-parameters body.
impl<S: Send + Sync> FromRequestParts<S> for ResourceQuery {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<ResourceQuery>::from_request_parts(parts, state).await {
            Ok(Query(query)) => Ok(query),
            Err(rejection) => {
                debug!("Ignoring query string: {}", rejection.body_text());
                Ok(ResourceQuery::default())
            }
        }
    }
}
