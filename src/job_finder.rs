//! Search orchestration across every configured source

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, instrument, warn};

use crate::aggregator::ResultSet;
use crate::config::Config;
use crate::crawler::{Fetcher, HttpClient};
use crate::error::{ServiceError, SourceError};
use crate::models::{Job, SearchOutcome, SearchQuery, SourceFailure};
use crate::sources;
use crate::traits::JobSource;

/// Runs a search across every configured source
#[derive(Clone)]
pub struct JobFinder {
    fetcher: Fetcher,
    sources: Arc<[Arc<dyn JobSource>]>,
}

impl JobFinder {
    pub fn new(fetcher: Fetcher, sources: Vec<Arc<dyn JobSource>>) -> Self {
        Self {
            fetcher,
            sources: sources.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let client = HttpClient::new(&config.user_agent)?;
        let fetcher = Fetcher::new(Arc::new(client), config.fetch_timeout);

        Ok(Self::new(fetcher, sources::enabled_sources(&config.sources)))
    }

    pub fn sources(&self) -> &[Arc<dyn JobSource>] {
        &self.sources
    }

    /// Query every source concurrently and collect the jobs that pass
    /// validation. Failing sources are recorded and skipped; the search
    /// itself never fails.
    ///
    /// Dropping the returned future abandons all in-flight fetches along with
    /// whatever was collected so far.
    #[instrument(skip(self))]
    pub async fn search(&self, title: &str, location: &str) -> SearchOutcome {
        let query = SearchQuery::new(title, location);
        let results = ResultSet::new();

        let runs = self.sources.iter().map(|source| {
            let query = &query;
            let results = &results;
            async move {
                let descriptor = source.descriptor();
                let url = source.build_search_url(query);

                let outcome = self
                    .fetcher
                    .run(source.as_ref(), &url, |candidate| {
                        results.accept(candidate, query);
                    })
                    .await;

                match outcome {
                    Ok(candidates) => {
                        info!(source = %descriptor.id, candidates, "Source finished");
                        None
                    }
                    Err(e) => {
                        warn!(source = %descriptor.id, %url, error = %e, "Source failed");
                        Some(SourceFailure {
                            source: descriptor.id.clone(),
                            url,
                            error: e.to_string(),
                        })
                    }
                }
            }
        });

        let failures: Vec<SourceFailure> = join_all(runs).await.into_iter().flatten().collect();
        let jobs = results.into_jobs();

        info!(
            jobs = jobs.len(),
            failed_sources = failures.len(),
            "Search complete"
        );

        SearchOutcome { jobs, failures }
    }
}

/// Serialize jobs for the wire. `&` in URLs is emitted literally.
pub fn to_json(jobs: &[Job]) -> Result<String, ServiceError> {
    serde_json::to_string(jobs).map_err(ServiceError::Serialize)
}
