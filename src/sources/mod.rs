//! Job listing sources.
//!
//! Each site is described by a [`SourceDescriptor`]; the descriptor's
//! [`ListingFormat`] picks the [`JobSource`] implementation that extracts
//! candidates from it.
//!
//! | Source | Module | Format | Notes |
//! |--------|--------|--------|-------|
//! | Indeed | [`indeed`] | HTML | Entry-level filter, links prefixed once |
//! | Monster | [`monster`] | HTML | Hyphen-separated terms, absolute links |
//! | Stack Overflow Jobs | [`stackoverflow`] | HTML | Radius qualifier, company cut at line break |
//! | GitHub Jobs | [`github_jobs`] | JSON API | Public positions endpoint |

use std::sync::Arc;

use crate::traits::{JobSource, ListingFormat, SourceDescriptor};

pub mod github_jobs;
pub mod html;
pub mod indeed;
pub mod monster;
pub mod stackoverflow;

pub use github_jobs::GithubJobsSource;
pub use html::HtmlSource;

/// Descriptors for every built-in source
pub fn default_descriptors() -> Vec<SourceDescriptor> {
    vec![
        indeed::descriptor(),
        monster::descriptor(),
        stackoverflow::descriptor(),
        github_jobs::descriptor(),
    ]
}

/// Wrap a descriptor in the source implementation for its format
pub fn source_for(descriptor: SourceDescriptor) -> Arc<dyn JobSource> {
    match descriptor.format {
        ListingFormat::Html(_) => Arc::new(HtmlSource::new(descriptor)),
        ListingFormat::Json => Arc::new(GithubJobsSource::new(descriptor)),
    }
}

/// Build the enabled sources. An empty `enabled` list turns on all of them.
pub fn enabled_sources(enabled: &[String]) -> Vec<Arc<dyn JobSource>> {
    default_descriptors()
        .into_iter()
        .filter(|d| enabled.is_empty() || enabled.iter().any(|id| id == &d.id))
        .map(source_for)
        .collect()
}
