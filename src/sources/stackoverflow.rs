//! Stack Overflow Jobs descriptor

use crate::traits::{CompanyRule, LinkRule, ListingFormat, SiteSelectors, SourceDescriptor};

pub const ID: &str = "stackoverflow";

/// Stack Overflow Jobs, searched within 20 miles of a US location.
///
/// The company header also wraps the location span, so the scraped company
/// text runs on past a line break and has to be cut there.
pub fn descriptor() -> SourceDescriptor {
    SourceDescriptor {
        id: ID.to_string(),
        name: "Stack Overflow Jobs".to_string(),
        search_url_pattern:
            "https://stackoverflow.com/jobs?q={title}&l={location}%2C+USA&d=20&u=Miles".to_string(),
        word_separator: '+',
        format: ListingFormat::Html(SiteSelectors {
            container: "div.-job".to_string(),
            title: "a.s-link".to_string(),
            company: "h3 > span".to_string(),
            location: "span.fc-black-500".to_string(),
            link: "a.s-link[href]".to_string(),
            link_attr: "href".to_string(),
        }),
        link_rule: LinkRule::Prefix("https://stackoverflow.com".to_string()),
        company_rule: CompanyRule::CutAtLineBreak,
    }
}
