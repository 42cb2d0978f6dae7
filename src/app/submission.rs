//! Submission round trip with a single in-flight request

use crate::backend::PlanBackend;
use crate::error::SubmitError;
use crate::task::{Pending, Spawner, TaskPoll};
use crate::types::SubmissionRecord;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome line shown under the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionMessage {
    Confirmed(String),
    Failed(String),
}

#[derive(Default)]
pub struct SubmissionTracker {
    task: Option<Pending<Result<String, SubmitError>>>,
    message: Option<SubmissionMessage>,
}

impl SubmissionTracker {
    /// Hand `record` to the backend. Returns false (and drops the record)
    /// while another submission is still in flight.
    pub fn begin(
        &mut self,
        backend: Arc<dyn PlanBackend>,
        record: SubmissionRecord,
        spawner: &Spawner,
    ) -> bool {
        if self.is_in_flight() {
            warn!("Submission already in flight, ignoring");
            return false;
        }
        info!("Sending preferences");
        self.message = None;
        self.task = Some(spawner.spawn(async move { backend.submit(record).await }));
        true
    }

    /// Returns true when the in-flight submission finished this call.
    pub fn poll(&mut self) -> bool {
        let Some(task) = self.task.as_mut() else {
            return false;
        };
        let outcome = match task.poll() {
            TaskPoll::Running => return false,
            TaskPoll::Ready(outcome) => outcome,
            TaskPoll::Abandoned => {
                warn!("Submission ended without a result");
                self.task = None;
                return true;
            }
        };
        self.task = None;
        self.message = Some(match outcome {
            Ok(confirmation) => {
                info!("Submission confirmed");
                SubmissionMessage::Confirmed(confirmation)
            }
            Err(e) => {
                warn!(error = %e, "Error sending data to backend");
                SubmissionMessage::Failed(e.user_message().to_string())
            }
        });
        true
    }

    pub fn is_in_flight(&self) -> bool {
        self.task.is_some()
    }

    pub fn message(&self) -> Option<&SubmissionMessage> {
        self.message.as_ref()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::backend::SimulatedBackend;
    use crate::constants::{SUBMIT_CONFIRMATION, SUBMIT_FAILED};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Backend that holds every submission until released
    pub(crate) struct GatedBackend {
        pub(crate) gate: Notify,
        pub(crate) received: AtomicUsize,
        pub(crate) fail: bool,
    }

    impl GatedBackend {
        pub(crate) fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                gate: Notify::new(),
                received: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl PlanBackend for GatedBackend {
        async fn submit(&self, _record: SubmissionRecord) -> Result<String, SubmitError> {
            self.received.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            if self.fail {
                Err(SubmitError::Status(StatusCode::BAD_GATEWAY))
            } else {
                Ok(SUBMIT_CONFIRMATION.to_string())
            }
        }
    }

    pub(crate) fn record() -> SubmissionRecord {
        SubmissionRecord {
            trip_type: "domestic".into(),
            duration: "3-5".into(),
            country_name: "Canada".into(),
            passport_country_name: "Canada".into(),
            selected_month: "07".into(),
            selected_travel_type: "family".into(),
        }
    }

    pub(crate) async fn settle(tracker: &mut SubmissionTracker) {
        for _ in 0..100 {
            if tracker.poll() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("submission did not finish");
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let backend = GatedBackend::new(false);
        let spawner = Spawner::current();
        let mut tracker = SubmissionTracker::default();

        assert!(tracker.begin(backend.clone(), record(), &spawner));
        assert!(tracker.is_in_flight());
        assert!(!tracker.begin(backend.clone(), record(), &spawner));

        tokio::task::yield_now().await;
        backend.gate.notify_one();
        settle(&mut tracker).await;

        assert!(!tracker.is_in_flight());
        assert_eq!(
            tracker.message(),
            Some(&SubmissionMessage::Confirmed(SUBMIT_CONFIRMATION.to_string()))
        );
        assert_eq!(backend.received.load(Ordering::SeqCst), 1);
        assert!(!tracker.poll());
    }

    #[tokio::test]
    async fn backend_failure_clears_in_flight() {
        let backend = GatedBackend::new(true);
        let spawner = Spawner::current();
        let mut tracker = SubmissionTracker::default();

        tracker.begin(backend.clone(), record(), &spawner);
        tokio::task::yield_now().await;
        backend.gate.notify_one();
        settle(&mut tracker).await;

        assert!(!tracker.is_in_flight());
        assert_eq!(
            tracker.message(),
            Some(&SubmissionMessage::Failed(SUBMIT_FAILED.to_string()))
        );
    }

    #[tokio::test]
    async fn new_submission_clears_previous_message() {
        let backend = Arc::new(SimulatedBackend::new(Duration::ZERO));
        let spawner = Spawner::current();
        let mut tracker = SubmissionTracker::default();

        tracker.begin(backend.clone(), record(), &spawner);
        settle(&mut tracker).await;
        assert!(tracker.message().is_some());

        tracker.begin(backend, record(), &spawner);
        assert!(tracker.message().is_none());
        settle(&mut tracker).await;
        assert!(tracker.message().is_some());
    }

    #[tokio::test]
    async fn shutdown_mid_flight_releases_flag_without_message() {
        let backend = GatedBackend::new(false);
        let spawner = Spawner::current();
        let mut tracker = SubmissionTracker::default();

        tracker.begin(backend, record(), &spawner);
        spawner.shutdown();
        settle(&mut tracker).await;

        assert!(!tracker.is_in_flight());
        assert!(tracker.message().is_none());
    }
}
