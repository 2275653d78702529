//! HTTP client for the registration endpoint
//!
//! The record is posted as JSON. A client-error response carrying
//! `{"errors": [{"path": ..., "msg": ...}]}` is turned into a field-level
//! rejection using its first entry; everything else is reported as-is.

use super::error::SubmitError;
use super::traits::RegistrationClientTrait;
use crate::state::{FieldName, FieldSet};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Default registration endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/register";

/// Successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub status: StatusCode,
    /// Response body, `Null` when it was not JSON
    pub body: Value,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(alias = "param")]
    path: String,
    msg: String,
}

/// Client for posting registrations
pub struct RegistrationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RegistrationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for RegistrationClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl RegistrationClientTrait for RegistrationClient {
    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    async fn submit(&self, fields: &FieldSet) -> Result<SubmitReceipt, SubmitError> {
        let response = self.http.post(&self.endpoint).json(fields).send().await?;
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            let body = serde_json::from_str(&text).unwrap_or(Value::Null);
            return Ok(SubmitReceipt { status, body });
        }

        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(match first_field_error(&body) {
                Some((field, message)) => SubmitError::Rejected { field, message },
                None => SubmitError::BadRequest { status, body },
            });
        }

        Err(SubmitError::Status { status })
    }
}

/// First reported error, if the body has the expected shape and names a known field
fn first_field_error(body: &str) -> Option<(FieldName, String)> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let entry = parsed.errors.into_iter().next()?;
    let field = FieldName::from_path(&entry.path)?;
    Some((field, entry.msg))
}
