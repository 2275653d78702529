//! Trait abstraction for the registration client to enable mocking in tests

use super::client::SubmitReceipt;
use super::error::SubmitError;
use crate::state::FieldSet;
use async_trait::async_trait;

/// Trait for registration endpoint operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationClientTrait: Send + Sync {
    /// Endpoint the record is posted to
    fn endpoint(&self) -> String;

    /// Post the record as-is and classify the response
    async fn submit(&self, fields: &FieldSet) -> Result<SubmitReceipt, SubmitError>;
}
