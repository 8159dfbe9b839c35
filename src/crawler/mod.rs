//! Single-page fetching for job sources

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::SourceError;
use crate::models::Job;
use crate::traits::JobSource;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Retrieves the body of one results page
#[async_trait]
pub trait PageClient: Send + Sync {
    async fn get_page(&self, url: &str) -> Result<String, SourceError>;
}

/// `PageClient` backed by a shared reqwest client
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self, SourceError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageClient for HttpClient {
    async fn get_page(&self, url: &str) -> Result<String, SourceError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Fetches one page per source and hands it to the source's extractor
#[derive(Clone)]
pub struct Fetcher {
    client: Arc<dyn PageClient>,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(client: Arc<dyn PageClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Fetch `url` and forward every candidate the source extracts to
    /// `on_record`. Nothing is retried.
    ///
    /// # Returns
    /// * `Result<usize, SourceError>` - Number of candidates forwarded
    #[instrument(level = "debug", skip_all, fields(source = %source.descriptor().id, %url))]
    pub async fn run(
        &self,
        source: &dyn JobSource,
        url: &str,
        mut on_record: impl FnMut(Job) + Send,
    ) -> Result<usize, SourceError> {
        let body = tokio::time::timeout(self.timeout, self.client.get_page(url))
            .await
            .map_err(|_| SourceError::Timeout {
                url: url.to_string(),
                after: self.timeout,
            })??;

        debug!(bytes = body.len(), "Fetched results page");

        // The parsed document is not Send, so extraction stays synchronous
        let count = source.extract(&body, &mut on_record)?;

        debug!(candidates = count, "Extracted candidates");
        Ok(count)
    }
}
