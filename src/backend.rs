//! Planning backend port and its implementations

use crate::constants::SUBMIT_CONFIRMATION;
use crate::error::SubmitError;
use crate::types::SubmissionRecord;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Receiver of submission records. Resolves with the confirmation to show.
#[async_trait]
pub trait PlanBackend: Send + Sync {
    async fn submit(&self, record: SubmissionRecord) -> Result<String, SubmitError>;
}

/// Stand-in backend: waits for an artificial delay, then always confirms
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PlanBackend for SimulatedBackend {
    async fn submit(&self, record: SubmissionRecord) -> Result<String, SubmitError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        info!(record = ?record, "Preferences collected for backend");
        Ok(SUBMIT_CONFIRMATION.to_string())
    }
}

/// POSTs the record as JSON; any 2xx counts as accepted
pub struct HttpBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpBackend {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PlanBackend for HttpBackend {
    async fn submit(&self, record: SubmissionRecord) -> Result<String, SubmitError> {
        debug!(url = %self.url, "Posting preferences");
        let response = self.client.post(&self.url).json(&record).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status));
        }
        info!(status = %status, "Preferences accepted by backend");
        Ok(SUBMIT_CONFIRMATION.to_string())
    }
}
