//! Markdown pipe-table encoding

use crate::core::table::{Grid, RowTag};
use crate::data::constants::{MARKDOWN_DIVIDER_CELL, WHITESPACE_RUN};

/// Render a grid as a pipe table.
///
/// The divider follows the first row tagged as header (or sole) row. If no
/// row carries such a tag the first row is taken as the header.
pub fn to_markdown(grid: &Grid, tags: &[RowTag]) -> String {
    if grid.is_empty() {
        return String::new();
    }

    let divider_after = tags
        .iter()
        .take(grid.height())
        .position(RowTag::ends_header)
        .unwrap_or(0);

    let mut output = String::new();

    for (row_idx, row) in grid.text_rows().enumerate() {
        if tags.get(row_idx) == Some(&RowTag::Unclassified) {
            log::debug!("row {} has no classification, emitting it as a body row", row_idx);
        }

        if row_idx > 0 {
            output.push('\n');
        }
        push_row(&mut output, row.iter().map(|content| escape_cell(content)));

        if row_idx == divider_after {
            output.push('\n');
            push_row(
                &mut output,
                std::iter::repeat(MARKDOWN_DIVIDER_CELL).take(grid.width()),
            );
        }
    }

    output
}

/// Make cell content safe for a single table line.
///
/// Newlines and whitespace runs collapse to one space and pipes are escaped.
pub fn escape_cell(content: &str) -> String {
    WHITESPACE_RUN
        .replace_all(content, " ")
        .trim()
        .replace('|', "\\|")
}

fn push_row<I, S>(output: &mut String, cells: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    output.push('|');
    for cell in cells {
        output.push(' ');
        output.push_str(cell.as_ref());
        output.push_str(" |");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{GridBuilder, SourceCell};
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> Grid {
        let mut builder = GridBuilder::new();
        for row in rows {
            builder.add_row(row.iter().map(|c| SourceCell::new(*c)).collect());
        }
        builder.finalize()
    }

    #[test]
    fn test_header_and_body() {
        let g = grid(&[&["A", "B"], &["1", "2"]]);
        let md = to_markdown(&g, &[RowTag::HeaderRow, RowTag::FirstBodyRow]);
        assert_eq!(md, "| A | B |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn test_sole_row() {
        let g = grid(&[&["only"]]);
        assert_eq!(to_markdown(&g, &[RowTag::SoleRow]), "| only |\n| --- |");
    }

    #[test]
    fn test_divider_follows_tagged_header() {
        let g = grid(&[&["x"], &["H"], &["y"]]);
        let md = to_markdown(
            &g,
            &[RowTag::BodyRow, RowTag::HeaderRow, RowTag::FirstBodyRow],
        );
        assert_eq!(md, "| x |\n| H |\n| --- |\n| y |");
    }

    #[test]
    fn test_missing_header_tag_uses_first_row() {
        let g = grid(&[&["a"], &["b"]]);
        let md = to_markdown(&g, &[RowTag::Unclassified, RowTag::BodyRow]);
        assert_eq!(md, "| a |\n| --- |\n| b |");
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a | b"), "a \\| b");
        assert_eq!(escape_cell("  line one\nline   two \n"), "line one line two");
        assert_eq!(escape_cell(""), "");
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(to_markdown(&grid(&[]), &[]), "");
        assert_eq!(to_markdown(&grid(&[&[]]), &[RowTag::SoleRow]), "");
    }
}
