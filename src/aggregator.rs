//! Per-search collection of validated jobs

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::models::{Job, SearchQuery};

/// Sizing hint only; the set grows past it freely.
const INITIAL_CAPACITY: usize = 300;

/// Jobs accepted during one search, in discovery order.
///
/// Sources running concurrently append through a shared reference, so every
/// append happens under the lock.
#[derive(Debug)]
pub struct ResultSet {
    jobs: Mutex<Vec<Job>>,
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSet {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::with_capacity(INITIAL_CAPACITY)),
        }
    }

    /// Validate a candidate and append it if it has a title and a URL.
    /// A missing location falls back to the query's location.
    pub fn accept(&self, mut candidate: Job, query: &SearchQuery) -> bool {
        if candidate.location.is_empty() {
            candidate.location.clone_from(&query.location);
        }

        if candidate.title.is_empty() || candidate.url.is_empty() {
            trace!(title = %candidate.title, url = %candidate.url, "Dropping incomplete candidate");
            return false;
        }

        self.lock().push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_jobs(self) -> Vec<Job> {
        self.jobs.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // Pushes are atomic with respect to panics, so a poisoned Vec is still consistent
    fn lock(&self) -> MutexGuard<'_, Vec<Job>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn candidate(title: &str, location: &str, url: &str) -> Job {
        Job {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_accepts_iff_title_and_url_present() {
        let query = SearchQuery::new("engineer", "Raleigh");
        let cases = [
            ("Engineer", "https://a.example/1", true),
            ("", "https://a.example/2", false),
            ("Engineer", "", false),
            ("", "", false),
        ];

        for (title, url, expected) in cases {
            let results = ResultSet::new();
            for location in ["", "Durham"] {
                let accepted = results.accept(candidate(title, location, url), &query);
                assert_eq!(accepted, !title.is_empty() && !url.is_empty());
                assert_eq!(accepted, expected);
            }
        }
    }

    #[test]
    fn test_location_falls_back_to_query() {
        let query = SearchQuery::new("engineer", "Miami FL");
        let results = ResultSet::new();

        results.accept(candidate("Engineer", "", "https://a.example/1"), &query);
        results.accept(candidate("Engineer", "Remote", "https://a.example/2"), &query);

        let jobs = results.into_jobs();
        assert_eq!(jobs[0].location, "Miami FL");
        assert_eq!(jobs[1].location, "Remote");
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let query = SearchQuery::default();
        let results = ResultSet::new();
        let job = candidate("Engineer", "Remote", "https://a.example/1");

        assert!(results.accept(job.clone(), &query));
        assert!(results.accept(job.clone(), &query));

        assert_eq!(results.into_jobs(), vec![job.clone(), job]);
    }

    #[test]
    fn test_concurrent_appends_are_all_kept() {
        let query = Arc::new(SearchQuery::new("engineer", "Remote"));
        let results = Arc::new(ResultSet::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let query = Arc::clone(&query);
                let results = Arc::clone(&results);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        let url = format!("https://a.example/{worker}/{i}");
                        results.accept(candidate("Engineer", "", &url), &query);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(results.len(), 800);
    }
}
