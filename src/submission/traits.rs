//! Trait abstraction for the form endpoint to enable mocking in tests

use super::SubmissionError;
use crate::state::FormPayload;
use async_trait::async_trait;

/// Hosted form-intake service the registration is forwarded to
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormEndpoint: Send + Sync {
    /// Post the payload; any HTTP status counts as delivered
    async fn post_form(&self, payload: &FormPayload) -> Result<u16, SubmissionError>;
}
