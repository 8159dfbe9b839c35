//! Generic scraper for sites that render results as HTML

use scraper::Html;

use crate::error::SourceError;
use crate::extractor::HtmlExtractor;
use crate::models::Job;
use crate::traits::{JobSource, ListingFormat, SourceDescriptor};

/// Source implementation driven entirely by its descriptor's selectors
#[derive(Debug, Clone)]
pub struct HtmlSource {
    descriptor: SourceDescriptor,
}

impl HtmlSource {
    pub fn new(descriptor: SourceDescriptor) -> Self {
        Self { descriptor }
    }
}

impl JobSource for HtmlSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn extract(&self, body: &str, on_record: &mut dyn FnMut(Job)) -> Result<usize, SourceError> {
        let ListingFormat::Html(selectors) = &self.descriptor.format else {
            return Err(SourceError::Selector {
                selector: String::new(),
                reason: format!("{} has no HTML selectors", self.descriptor.name),
            });
        };

        let extractor = HtmlExtractor::new(
            selectors,
            &self.descriptor.link_rule,
            self.descriptor.company_rule,
        )?;
        let document = Html::parse_document(body);

        let mut count = 0;
        for job in extractor.extract(&document) {
            on_record(job);
            count += 1;
        }

        Ok(count)
    }
}
