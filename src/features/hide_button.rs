//! Collapsible-section artifact detection
//!
//! Some pages wrap a "hide" toggle in a one-cell table of its own. Converting
//! it would leave a stray one-cell table in the output, so such tables are
//! dropped entirely.

use crate::core::source::TableSource;
use crate::data::constants::HIDE_CONTROL_LABEL;

/// Whether a table holds nothing but a "hide" control.
///
/// True when the table has exactly one row, no data cells, one header cell,
/// and that header cell contains exactly one control labelled `hide`.
pub fn is_hide_button_table(table: &TableSource) -> bool {
    if table.row_count() != 1 {
        return false;
    }

    let Some(row) = table.rows().next() else {
        return false;
    };

    let data_cells = row.iter().filter(|cell| !cell.is_header).count();
    if data_cells != 0 {
        return false;
    }

    let mut header_cells = row.iter().filter(|cell| cell.is_header);
    let (Some(header), None) = (header_cells.next(), header_cells.next()) else {
        return false;
    };

    matches!(header.controls.as_slice(), [label] if label == HIDE_CONTROL_LABEL)
}
