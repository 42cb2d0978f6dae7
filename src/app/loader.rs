//! One-shot country list loading

use crate::constants::COUNTRY_LOAD_FAILED;
use crate::countries::{CountryCatalog, CountrySource};
use crate::error::LoadError;
use crate::task::{Pending, Spawner, TaskPoll};
use crate::types::Country;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    /// Holds the user-facing advisory
    Failed(String),
}

/// Loads the country list exactly once and owns the result
pub struct CountryLoader {
    status: LoadStatus,
    catalog: CountryCatalog,
    task: Option<Pending<Result<Vec<Country>, LoadError>>>,
    started: bool,
}

impl CountryLoader {
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Pending,
            catalog: CountryCatalog::default(),
            task: None,
            started: false,
        }
    }

    /// Issue the request. Later calls are ignored.
    pub fn start(&mut self, source: Arc<dyn CountrySource>, spawner: &Spawner) {
        if self.started {
            return;
        }
        self.started = true;
        info!("Loading country list");
        self.task = Some(spawner.spawn(async move { source.fetch().await }));
    }

    /// Pick up the result if it arrived. Returns true when the status changed.
    pub fn poll(&mut self) -> bool {
        let Some(task) = self.task.as_mut() else {
            return false;
        };
        match task.poll() {
            TaskPoll::Running => false,
            TaskPoll::Ready(Ok(countries)) => {
                info!(count = countries.len(), "Country list loaded");
                self.catalog = CountryCatalog::new(countries);
                self.status = LoadStatus::Loaded;
                self.task = None;
                true
            }
            TaskPoll::Ready(Err(e)) => {
                error!(error = %e, "Error fetching countries");
                self.status = LoadStatus::Failed(e.user_message().to_string());
                self.task = None;
                true
            }
            TaskPoll::Abandoned => {
                warn!("Country load ended without a result");
                self.status = LoadStatus::Failed(COUNTRY_LOAD_FAILED.to_string());
                self.task = None;
                true
            }
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == LoadStatus::Pending
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::countries::tests::country;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) struct StubSource {
        pub(crate) countries: Option<Vec<Country>>,
        pub(crate) calls: AtomicUsize,
    }

    impl StubSource {
        pub(crate) fn ok(countries: Vec<Country>) -> Arc<Self> {
            Arc::new(Self {
                countries: Some(countries),
                calls: AtomicUsize::new(0),
            })
        }

        pub(crate) fn failing() -> Arc<Self> {
            Arc::new(Self {
                countries: None,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CountrySource for StubSource {
        async fn fetch(&self) -> Result<Vec<Country>, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.countries {
                Some(list) => Ok(list.clone()),
                None => Err(LoadError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
            }
        }
    }

    /// Poll until the loader leaves `Pending`
    pub(crate) async fn settle(loader: &mut CountryLoader) {
        for _ in 0..100 {
            if loader.poll() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("country load did not finish");
    }

    #[tokio::test]
    async fn loads_once_and_exposes_catalog() {
        let source = StubSource::ok(vec![country("Canada", "CA"), country("France", "FR")]);
        let spawner = Spawner::current();
        let mut loader = CountryLoader::new();
        assert!(loader.is_pending());

        loader.start(source.clone(), &spawner);
        loader.start(source.clone(), &spawner);
        settle(&mut loader).await;

        assert_eq!(loader.status(), &LoadStatus::Loaded);
        assert_eq!(loader.catalog().countries().len(), 2);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(!loader.poll());
    }

    #[tokio::test]
    async fn failure_surfaces_fixed_advisory() {
        let source = StubSource::failing();
        let spawner = Spawner::current();
        let mut loader = CountryLoader::new();
        loader.start(source, &spawner);
        settle(&mut loader).await;

        assert_eq!(loader.status(), &LoadStatus::Failed(COUNTRY_LOAD_FAILED.to_string()));
        assert!(loader.catalog().countries().is_empty());
    }

    #[tokio::test]
    async fn shutdown_before_completion_fails_closed() {
        let source = StubSource::ok(vec![country("Canada", "CA")]);
        let spawner = Spawner::current();
        let mut loader = CountryLoader::new();
        spawner.shutdown();
        loader.start(source, &spawner);
        settle(&mut loader).await;
        assert!(matches!(loader.status(), LoadStatus::Failed(_)));
    }
}
