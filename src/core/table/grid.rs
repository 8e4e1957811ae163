//! Span-resolving grid builder

use fxhash::FxHashMap;

use super::cell::{GridCell, SourceCell, SpanOrigin};

/// A span that still covers the column in upcoming rows
#[derive(Debug, Clone, Copy)]
struct CarryOver {
    /// Rows left to cover, including the next one
    remaining: usize,
    /// Index into the origin list
    origin: usize,
}

/// Dense rectangular table after span resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    origins: Vec<SpanOrigin>,
    rows: Vec<Vec<GridCell>>,
}

impl Grid {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True for zero-row or zero-column grids
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows.is_empty()
    }

    /// Every span origin, in placement order
    pub fn origins(&self) -> &[SpanOrigin] {
        &self.origins
    }

    /// The resolved cells of one row
    pub fn row(&self, row: usize) -> Option<&[GridCell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// The resolved cell at `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        self.rows.get(row)?.get(col).copied()
    }

    /// The span owning `cell`
    pub fn origin_of(&self, cell: GridCell) -> &SpanOrigin {
        &self.origins[cell.origin]
    }

    /// Content visible at `(row, col)`; spanned coordinates repeat their origin's content
    pub fn content(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col).map(|cell| self.origin_of(cell).content.as_str())
    }

    /// Iterate over rows as content slices, with spans expanded
    pub fn text_rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.rows.iter().map(move |row| {
            row.iter()
                .map(|&cell| self.origin_of(cell).content.as_str())
                .collect()
        })
    }
}

/// Builds a [`Grid`] one source row at a time.
///
/// Row spans are tracked in a carry-over map keyed by column, so a cell
/// placed in an earlier row reserves its columns in the rows below it.
#[derive(Debug, Default)]
pub struct GridBuilder {
    /// Widest row seen so far
    width: usize,
    origins: Vec<SpanOrigin>,
    rows: Vec<Vec<GridCell>>,
    carry_over: FxHashMap<usize, CarryOver>,
}

impl GridBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the widest row added so far
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows added so far
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Place one source row.
    ///
    /// For each column position:
    /// 1. If a span from an earlier row covers it, reference that span
    /// 2. Otherwise take the next source cell and make it the origin
    /// 3. Register the cell's row span in the carry-over map
    ///
    /// Carried spans to the right of the last source cell are still placed,
    /// with empty padding filling any gap before them.
    pub fn add_row(&mut self, cells: Vec<SourceCell>) {
        let row_idx = self.rows.len();
        let mut row = Vec::with_capacity(self.width.max(cells.len()));
        let mut input = cells.into_iter();
        let mut col = 0;

        loop {
            if self.take_carry_over(col, &mut row) {
                col += 1;
                continue;
            }

            let Some(cell) = input.next() else {
                break;
            };

            let origin_idx = self.origins.len();
            self.origins.push(SpanOrigin::new(cell.content, row_idx, col));
            row.push(GridCell::origin(origin_idx));

            // A carried span wins over a colspan that runs into it
            let mut col_span = 1;
            while col_span < cell.col_span && !self.carry_over.contains_key(&(col + col_span)) {
                row.push(GridCell::covered(origin_idx));
                col_span += 1;
            }
            self.origins[origin_idx].col_span = col_span;
            self.origins[origin_idx].row_span = cell.row_span;

            if cell.row_span > 1 {
                for offset in 0..col_span {
                    self.carry_over.insert(
                        col + offset,
                        CarryOver {
                            remaining: cell.row_span - 1,
                            origin: origin_idx,
                        },
                    );
                }
            }

            col += col_span;
        }

        // Spans reaching past the last source cell
        let last_carried = self.carry_over.keys().copied().filter(|&c| c >= col).max();
        if let Some(last) = last_carried {
            while col <= last {
                if !self.take_carry_over(col, &mut row) {
                    self.push_placeholder(row_idx, col, &mut row);
                }
                col += 1;
            }
        }

        self.width = self.width.max(row.len());
        self.rows.push(row);
    }

    /// Pad every row to the final width and clamp spans to the final height
    pub fn finalize(mut self) -> Grid {
        let height = self.rows.len();
        let width = self.width;

        for row_idx in 0..height {
            let mut row = std::mem::take(&mut self.rows[row_idx]);
            for col in row.len()..width {
                self.push_placeholder(row_idx, col, &mut row);
            }
            self.rows[row_idx] = row;
        }

        for origin in &mut self.origins {
            origin.row_span = origin.row_span.min(height - origin.row);
        }

        Grid {
            width,
            origins: self.origins,
            rows: self.rows,
        }
    }

    /// Consume one row of a carried span at `col`, if any
    fn take_carry_over(&mut self, col: usize, row: &mut Vec<GridCell>) -> bool {
        let Some(entry) = self.carry_over.get_mut(&col) else {
            return false;
        };

        row.push(GridCell::covered(entry.origin));
        entry.remaining -= 1;
        if entry.remaining == 0 {
            self.carry_over.remove(&col);
        }
        true
    }

    fn push_placeholder(&mut self, row_idx: usize, col: usize, row: &mut Vec<GridCell>) {
        let origin_idx = self.origins.len();
        self.origins.push(SpanOrigin::placeholder(row_idx, col));
        row.push(GridCell::origin(origin_idx));
    }
}
