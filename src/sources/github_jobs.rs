//! GitHub Jobs public positions API

use serde::Deserialize;

use crate::error::SourceError;
use crate::models::Job;
use crate::traits::{CompanyRule, JobSource, LinkRule, ListingFormat, SourceDescriptor};

pub const ID: &str = "github_jobs";

pub fn descriptor() -> SourceDescriptor {
    SourceDescriptor {
        id: ID.to_string(),
        name: "GitHub Jobs".to_string(),
        search_url_pattern:
            "https://jobs.github.com/positions.json?description={title}&location={location}"
                .to_string(),
        word_separator: '+',
        format: ListingFormat::Json,
        link_rule: LinkRule::Verbatim,
        company_rule: CompanyRule::Trimmed,
    }
}

/// One entry of the positions payload. Fields we don't surface are ignored.
#[derive(Debug, Deserialize)]
struct Position {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Source backed by a JSON array of positions
#[derive(Debug, Clone)]
pub struct GithubJobsSource {
    descriptor: SourceDescriptor,
}

impl GithubJobsSource {
    pub fn new(descriptor: SourceDescriptor) -> Self {
        Self { descriptor }
    }
}

impl JobSource for GithubJobsSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn extract(&self, body: &str, on_record: &mut dyn FnMut(Job)) -> Result<usize, SourceError> {
        let positions: Vec<Position> = serde_json::from_str(body)?;
        let count = positions.len();

        for position in positions {
            on_record(Job {
                title: position.title.unwrap_or_default().trim().to_string(),
                company: self
                    .descriptor
                    .company_rule
                    .apply(&position.company.unwrap_or_default()),
                location: position.location.unwrap_or_default().trim().to_string(),
                url: self
                    .descriptor
                    .link_rule
                    .apply(&position.url.unwrap_or_default()),
            });
        }

        Ok(count)
    }
}
