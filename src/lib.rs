//! Aggregates job postings from several listing sites into one normalized
//! result set.

pub mod aggregator;
pub mod config;
pub mod crawler;
pub mod error;
pub mod extractor;
pub mod job_finder;
pub mod models;
pub mod server;
pub mod sources;
pub mod traits;
pub mod url_builder;

pub use config::Config;
pub use job_finder::JobFinder;
pub use models::{Job, SearchOutcome, SearchQuery};
