//! Data models for job postings and search requests

use serde::{Deserialize, Serialize};

/// A job posting normalized from one of the listing sites
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
}

/// The caller's search terms. Fixed for the duration of one search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
}

impl SearchQuery {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }
}

/// A source that could not contribute to a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFailure {
    pub source: String,
    pub url: String,
    pub error: String,
}

/// Everything one search produced: accepted jobs in discovery order plus
/// the sources that failed along the way.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub jobs: Vec<Job>,
    pub failures: Vec<SourceFailure>,
}
