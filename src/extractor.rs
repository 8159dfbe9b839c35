//! HTML extraction of candidate jobs from a results page

use scraper::{ElementRef, Html, Selector};

use crate::error::SourceError;
use crate::models::Job;
use crate::traits::{CompanyRule, LinkRule, SiteSelectors};

/// Selectors for one source, parsed once per run
pub struct HtmlExtractor<'s> {
    container: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    link: Selector,
    link_attr: &'s str,
    link_rule: &'s LinkRule,
    company_rule: CompanyRule,
}

impl<'s> HtmlExtractor<'s> {
    pub fn new(
        selectors: &'s SiteSelectors,
        link_rule: &'s LinkRule,
        company_rule: CompanyRule,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            container: parse_selector(&selectors.container)?,
            title: parse_selector(&selectors.title)?,
            company: parse_selector(&selectors.company)?,
            location: parse_selector(&selectors.location)?,
            link: parse_selector(&selectors.link)?,
            link_attr: &selectors.link_attr,
            link_rule,
            company_rule,
        })
    }

    /// Walk every posting container in the document once, yielding
    /// unfiltered candidates in document order.
    pub fn extract<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = Job> + 'a {
        document.select(&self.container).map(move |posting| {
            let href = posting
                .select(&self.link)
                .find_map(|el| el.value().attr(self.link_attr))
                .unwrap_or_default();

            Job {
                title: child_text(posting, &self.title),
                company: self.company_rule.apply(&child_text(posting, &self.company)),
                location: child_text(posting, &self.location),
                url: self.link_rule.apply(href),
            }
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, SourceError> {
    Selector::parse(selector).map_err(|e| SourceError::Selector {
        selector: selector.to_string(),
        reason: format!("{e:?}"),
    })
}

/// Text of every match under `parent`, concatenated and trimmed.
fn child_text(parent: ElementRef<'_>, selector: &Selector) -> String {
    parent
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}
