//! Delivery of registrations to the external form endpoint

mod client;
mod traits;

pub use client::HttpFormEndpoint;
pub use traits::FormEndpoint;

#[cfg(test)]
pub use traits::MockFormEndpoint;

use crate::state::FormPayload;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Failure to deliver a registration
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("invalid form endpoint URL {0}")]
    InvalidUrl(String),
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("form endpoint unreachable")]
    Transport(#[source] reqwest::Error),
}

/// Forward a payload in the background.
///
/// Returns at once; the outcome is only logged. The handle lets callers
/// await delivery, the page never does.
pub fn dispatch(endpoint: Arc<dyn FormEndpoint>, payload: FormPayload) -> JoinHandle<()> {
    let submission_id = Uuid::new_v4();
    tracing::info!(
        %submission_id,
        role = payload.get("rol").unwrap_or_default(),
        fields = ?payload.names(),
        "dispatching registration"
    );

    tokio::spawn(async move {
        match endpoint.post_form(&payload).await {
            Ok(status) => {
                tracing::info!(%submission_id, status, "registration delivered");
            }
            Err(err) => {
                tracing::warn!(%submission_id, error = %err, "registration delivery failed");
            }
        }
    })
}
