//! Preference form controller: country loading, selection and the submit protocol

use super::form::{FieldUpdate, FormSelection};
use super::loader::CountryLoader;
use super::submission::SubmissionTracker;
use crate::backend::PlanBackend;
use crate::countries::CountrySource;
use crate::error::ValidationError;
use crate::task::Spawner;
use std::sync::Arc;

pub struct PlanForm {
    pub(crate) selection: FormSelection,
    pub(crate) loader: CountryLoader,
    pub(crate) submission: SubmissionTracker,
    backend: Arc<dyn PlanBackend>,
    /// Blocking "fill every field" notice is open
    pub(crate) show_incomplete_notice: bool,
}

impl PlanForm {
    /// Creates the form and issues the one country list request
    pub fn new(
        source: Arc<dyn CountrySource>,
        backend: Arc<dyn PlanBackend>,
        spawner: &Spawner,
    ) -> Self {
        let mut loader = CountryLoader::new();
        loader.start(source, spawner);
        Self {
            selection: FormSelection::default(),
            loader,
            submission: SubmissionTracker::default(),
            backend,
            show_incomplete_notice: false,
        }
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        self.selection.set_field(update);
    }

    /// Drain finished background work. Returns true if anything changed.
    pub fn poll(&mut self) -> bool {
        let loaded = self.loader.poll();
        let submitted = self.submission.poll();
        loaded || submitted
    }

    /// Submit is offered once the country load settled and nothing is in flight
    pub fn can_submit(&self) -> bool {
        !self.loader.is_pending() && !self.submission.is_in_flight()
    }

    /// Validate and hand the record to the backend. On validation failure the
    /// blocking notice is raised and nothing is sent.
    pub fn submit(&mut self, spawner: &Spawner) -> Result<(), ValidationError> {
        if !self.can_submit() {
            return Ok(());
        }
        match self.selection.build_submission(self.loader.catalog()) {
            Ok(record) => {
                self.submission.begin(self.backend.clone(), record, spawner);
                Ok(())
            }
            Err(e) => {
                self.show_incomplete_notice = true;
                Err(e)
            }
        }
    }
}
