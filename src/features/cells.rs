//! Cell content predicates for extractors

use crate::data::constants::HEADING_TAG;

/// Whether a cell must be passed through as raw text.
///
/// `child_tags` are the element names of the cell's direct children. A
/// nested table or a heading has no faithful rendering inside a single
/// table cell, so such cells skip prose conversion.
pub fn is_unconvertible_cell<S: AsRef<str>>(child_tags: &[S]) -> bool {
    child_tags.iter().any(|tag| {
        let tag = tag.as_ref().trim();
        tag.eq_ignore_ascii_case("table") || HEADING_TAG.is_match(tag)
    })
}
