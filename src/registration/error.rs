//! Submission failures

use crate::state::FieldName;
use reqwest::StatusCode;
use thiserror::Error;

/// Why a registration submission did not succeed
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint rejected one field; the message belongs in that field's slot
    #[error("{field}: {message}")]
    Rejected { field: FieldName, message: String },

    /// Client-error status whose body did not name a known field
    #[error("request rejected ({status}): {body}")]
    BadRequest { status: StatusCode, body: String },

    /// Server error or any other unexpected status
    #[error("registration endpoint returned {status}")]
    Status { status: StatusCode },

    /// The request never got a response
    #[error("failed to reach registration endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// The field and message to show when the failure maps onto a slot
    pub fn field_error(&self) -> Option<(FieldName, &str)> {
        match self {
            Self::Rejected { field, message } => Some((*field, message.as_str())),
            _ => None,
        }
    }
}
