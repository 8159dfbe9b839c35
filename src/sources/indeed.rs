//! Indeed.com descriptor

use crate::traits::{CompanyRule, LinkRule, ListingFormat, SiteSelectors, SourceDescriptor};

pub const ID: &str = "indeed";

/// Indeed search limited to entry-level postings. Result links are usually
/// relative but some already carry the domain.
pub fn descriptor() -> SourceDescriptor {
    SourceDescriptor {
        id: ID.to_string(),
        name: "Indeed".to_string(),
        search_url_pattern: "https://www.indeed.com/jobs?q={title}&l={location}&explvl=entry_level"
            .to_string(),
        word_separator: '+',
        format: ListingFormat::Html(SiteSelectors {
            container: "div.jobsearch-SerpJobCard".to_string(),
            title: "a.jobtitle".to_string(),
            company: "span.company".to_string(),
            location: "span.location".to_string(),
            link: "h2.title > a".to_string(),
            link_attr: "href".to_string(),
        }),
        link_rule: LinkRule::PrefixOnce("https://indeed.com".to_string()),
        company_rule: CompanyRule::Trimmed,
    }
}
