//! Monster.com descriptor

use crate::traits::{CompanyRule, LinkRule, ListingFormat, SiteSelectors, SourceDescriptor};

pub const ID: &str = "monster";

/// Monster expects hyphen-separated search terms and links to absolute
/// posting URLs.
pub fn descriptor() -> SourceDescriptor {
    SourceDescriptor {
        id: ID.to_string(),
        name: "Monster".to_string(),
        search_url_pattern: "https://www.monster.com/jobs/search/?q={title}&where={location}"
            .to_string(),
        word_separator: '-',
        format: ListingFormat::Html(SiteSelectors {
            container: "div.flex-row".to_string(),
            title: "a".to_string(),
            company: "div.company > span.name".to_string(),
            location: "div.location > span.name".to_string(),
            link: "a[href]".to_string(),
            link_attr: "href".to_string(),
        }),
        link_rule: LinkRule::Verbatim,
        company_rule: CompanyRule::Trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use crate::sources::HtmlSource;
    use crate::traits::JobSource;

    #[test]
    fn test_extracts_monster_rows() {
        let page = r#"
            <div class="flex-row">
              <h2><a href="https://job-openings.monster.com/rust-engineer/abc">Rust Engineer</a></h2>
              <div class="company"><span class="name">Ferrous Systems</span></div>
              <div class="location"><span class="name"> Miami, FL </span></div>
            </div>
        "#;
        let source = HtmlSource::new(descriptor());
        let mut jobs: Vec<Job> = Vec::new();

        source.extract(page, &mut |job| jobs.push(job)).unwrap();

        assert_eq!(
            jobs,
            vec![Job {
                title: "Rust Engineer".to_string(),
                company: "Ferrous Systems".to_string(),
                location: "Miami, FL".to_string(),
                url: "https://job-openings.monster.com/rust-engineer/abc".to_string(),
            }]
        );
    }
}
