//! CSV and TSV encodings

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::core::table::Grid;
use crate::utils::error::{ConversionError, ConversionResult};

/// Render a grid as delimiter-separated records, one per row.
///
/// A field is quoted only when it contains the delimiter, a double quote or
/// a line break. A record consisting of one empty field is written as `""`
/// so the row is not lost. Records are separated by `\n` with no trailing
/// newline.
pub fn to_delimited(grid: &Grid, delimiter: u8) -> ConversionResult<String> {
    if grid.is_empty() {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in grid.text_rows() {
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConversionError::internal(format!("delimited writer failed: {}", e)))?;
    let mut output = String::from_utf8(bytes)
        .map_err(|e| ConversionError::internal(format!("delimited output not UTF-8: {}", e)))?;

    if output.ends_with('\n') {
        output.pop();
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{GridBuilder, SourceCell};

    fn grid(rows: Vec<Vec<SourceCell>>) -> Grid {
        let mut builder = GridBuilder::new();
        for row in rows {
            builder.add_row(row);
        }
        builder.finalize()
    }

    fn plain(rows: &[&[&str]]) -> Grid {
        grid(
            rows.iter()
                .map(|row| row.iter().map(|c| SourceCell::new(*c)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_csv_colspan_repeats_content() {
        let g = grid(vec![
            vec![SourceCell::with_spans("Title", 2, 1)],
            vec![SourceCell::new("X"), SourceCell::new("Y")],
        ]);
        assert_eq!(to_delimited(&g, b',').unwrap(), "Title,Title\nX,Y");
    }

    #[test]
    fn test_csv_quoting() {
        let g = plain(&[&["a,b", "say \"hi\"", "two\nlines", "plain"]]);
        assert_eq!(
            to_delimited(&g, b',').unwrap(),
            "\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\",plain"
        );
    }

    #[test]
    fn test_tsv_only_quotes_tabs() {
        let g = plain(&[&["a,b", "c\td"]]);
        assert_eq!(to_delimited(&g, b'\t').unwrap(), "a,b\t\"c\td\"");
    }

    #[test]
    fn test_padding_keeps_shape() {
        let g = plain(&[&["a", "b", "c"], &["d"]]);
        assert_eq!(to_delimited(&g, b',').unwrap(), "a,b,c\nd,,");
    }

    #[test]
    fn test_lone_empty_field_is_quoted() {
        let g = grid(vec![vec![SourceCell::new("")], vec![SourceCell::new("a")]]);
        assert_eq!(to_delimited(&g, b',').unwrap(), "\"\"\na");
        assert_eq!(to_delimited(&g, b'\t').unwrap(), "\"\"\na");

        let reparsed = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("\"\"\na".as_bytes())
            .records()
            .count();
        assert_eq!(reparsed, 2);
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(to_delimited(&plain(&[]), b',').unwrap(), "");
    }
}
