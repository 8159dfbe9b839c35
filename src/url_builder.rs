//! Search URL construction

use crate::models::SearchQuery;
use crate::traits::SourceDescriptor;

/// Replace every space in a search term with the site's separator.
///
/// Words are percent-encoded individually so the separator is the only
/// unescaped delimiter left in the segment. Runs of spaces are kept as runs
/// of separators.
pub fn normalize_term(term: &str, separator: char) -> String {
    term.split(' ')
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

/// Build the full search results URL for a source.
///
/// Empty terms produce empty query segments rather than an error.
pub fn build(descriptor: &SourceDescriptor, query: &SearchQuery) -> String {
    let title = normalize_term(&query.title, descriptor.word_separator);
    let location = normalize_term(&query.location, descriptor.word_separator);

    descriptor
        .search_url_pattern
        .replace("{title}", &title)
        .replace("{location}", &location)
}
