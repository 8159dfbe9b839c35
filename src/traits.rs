//! Traits and descriptors for site-agnostic job scraping

use crate::error::SourceError;
use crate::models::{Job, SearchQuery};
use crate::url_builder;

/// Static description of one job listing site
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    /// Stable identifier used in configuration and logs
    pub id: String,
    /// Display name for the website
    pub name: String,
    /// Search URL pattern with `{title}` and `{location}` placeholders
    pub search_url_pattern: String,
    /// Joins the words of each search term in the URL
    pub word_separator: char,
    /// How the results page is laid out
    pub format: ListingFormat,
    /// Turns a scraped link into an absolute posting URL
    pub link_rule: LinkRule,
    /// Cleans up the scraped company field
    pub company_rule: CompanyRule,
}

/// Shape of the document a source returns
#[derive(Debug, Clone)]
pub enum ListingFormat {
    /// An HTML results page scraped with CSS selectors
    Html(SiteSelectors),
    /// A JSON array of postings
    Json,
}

/// CSS selectors for the parts of a job listing
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    /// Container selector for individual postings
    pub container: String,
    /// Title selector within the container
    pub title: String,
    /// Company selector within the container
    pub company: String,
    /// Location selector within the container
    pub location: String,
    /// Link selector within the container
    pub link: String,
    /// Attribute of the link element holding the URL
    pub link_attr: String,
}

/// Link absolutization rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRule {
    /// The site already links to absolute URLs
    Verbatim,
    /// Prefix a fixed domain or path unless the link is already absolute
    Prefix(String),
    /// Prefix the domain only when the link is relative and does not
    /// already contain it
    PrefixOnce(String),
}

impl LinkRule {
    /// Apply the rule to a trimmed link. Empty links stay empty.
    pub fn apply(&self, href: &str) -> String {
        let href = href.trim();
        if href.is_empty() {
            return String::new();
        }

        match self {
            Self::Verbatim => href.to_string(),
            Self::Prefix(prefix) => {
                if is_absolute(href) {
                    href.to_string()
                } else {
                    format!("{prefix}{href}")
                }
            }
            Self::PrefixOnce(domain) => {
                if is_absolute(href) || href.contains(domain.as_str()) {
                    href.to_string()
                } else {
                    format!("{domain}{href}")
                }
            }
        }
    }
}

fn is_absolute(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

/// Company field cleanup rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyRule {
    Trimmed,
    /// Drop everything from the first line break onwards
    CutAtLineBreak,
}

impl CompanyRule {
    pub fn apply(self, raw: &str) -> String {
        let company = raw.trim();
        match self {
            Self::Trimmed => company.to_string(),
            Self::CutAtLineBreak => company
                .split_once('\n')
                .map_or(company, |(head, _)| head.trim_end())
                .to_string(),
        }
    }
}

/// Trait for site-specific job sources
pub trait JobSource: Send + Sync {
    /// Get the descriptor for this source
    fn descriptor(&self) -> &SourceDescriptor;

    /// Extract candidate jobs from a fetched results page
    ///
    /// # Arguments
    /// * `body` - The raw response body
    /// * `on_record` - Receives every candidate, valid or not
    ///
    /// # Returns
    /// * `Result<usize, SourceError>` - Number of candidates produced or extraction error
    fn extract(&self, body: &str, on_record: &mut dyn FnMut(Job)) -> Result<usize, SourceError>;

    /// Build the search results URL for a query
    fn build_search_url(&self, query: &SearchQuery) -> String {
        url_builder::build(self.descriptor(), query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_once_is_idempotent() {
        let rule = LinkRule::PrefixOnce("https://indeed.com".to_string());

        let once = rule.apply("/rc/clk?jk=abc&fccid=1");
        let twice = rule.apply(&once);

        assert_eq!(once, "https://indeed.com/rc/clk?jk=abc&fccid=1");
        assert_eq!(twice, once);
    }

    #[test]
    fn test_prefix_once_leaves_links_on_other_hosts() {
        let rule = LinkRule::PrefixOnce("https://indeed.com".to_string());

        for href in [
            "https://www.indeed.com/viewjob?jk=3c4d",
            "http://www.indeed.com/viewjob?jk=3c4d",
            "https://apply.example.com/jobs/9",
        ] {
            assert_eq!(rule.apply(href), href);
            assert_eq!(rule.apply(&rule.apply(href)), href);
        }
    }

    #[test]
    fn test_prefix_leaves_absolute_links() {
        let rule = LinkRule::Prefix("https://stackoverflow.com".to_string());

        let once = rule.apply("/jobs/123/rust-dev");
        assert_eq!(once, "https://stackoverflow.com/jobs/123/rust-dev");
        assert_eq!(rule.apply(&once), once);
    }

    #[test]
    fn test_fixed_path_prefix() {
        let rule = LinkRule::Prefix("https://www.indeed.com/viewjob".to_string());

        assert_eq!(
            rule.apply("?jk=42"),
            "https://www.indeed.com/viewjob?jk=42"
        );
    }

    #[test]
    fn test_empty_link_stays_empty() {
        for rule in [
            LinkRule::Verbatim,
            LinkRule::Prefix("https://stackoverflow.com".to_string()),
            LinkRule::PrefixOnce("https://indeed.com".to_string()),
        ] {
            assert_eq!(rule.apply("   "), "");
        }
    }

    #[test]
    fn test_company_cut_at_line_break() {
        let rule = CompanyRule::CutAtLineBreak;

        assert_eq!(rule.apply("Acme Corp\nSponsored"), "Acme Corp");
        assert_eq!(rule.apply("Acme Corp"), "Acme Corp");
        assert_eq!(rule.apply("  Acme Corp  \n  Remote OK\n"), "Acme Corp");
    }

    #[test]
    fn test_company_trimmed_keeps_line_breaks() {
        assert_eq!(CompanyRule::Trimmed.apply(" Acme\nCorp "), "Acme\nCorp");
    }
}
