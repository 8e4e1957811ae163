//! Structural row classification
//!
//! Rows are tagged from their position alone: total row count, the group
//! they came from, and whether that group directly follows the header group.
//! Cell content is never inspected.

use std::fmt;

/// Structural group a row was found in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GroupKind {
    /// `thead`
    Header,
    /// `tbody`
    Body,
    /// `tfoot`, classified like a body group
    Footer,
    /// Rows placed directly under the table
    #[default]
    Root,
    /// Any other parent, kept by name for diagnostics
    Unknown(String),
}

impl GroupKind {
    /// Parse a group name as reported by the extractor
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "thead" | "header" | "head" => GroupKind::Header,
            "tbody" | "body" => GroupKind::Body,
            "tfoot" | "footer" | "foot" => GroupKind::Footer,
            "table" | "root" | "" => GroupKind::Root,
            _ => GroupKind::Unknown(name.to_string()),
        }
    }

    /// Canonical name of the group
    pub fn name(&self) -> &str {
        match self {
            GroupKind::Header => "thead",
            GroupKind::Body => "tbody",
            GroupKind::Footer => "tfoot",
            GroupKind::Root => "table",
            GroupKind::Unknown(name) => name,
        }
    }

    /// Body, footer and root groups all hold body rows
    pub fn is_body_like(&self) -> bool {
        matches!(self, GroupKind::Body | GroupKind::Footer | GroupKind::Root)
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<String> for GroupKind {
    fn from(name: String) -> Self {
        GroupKind::from_name(&name)
    }
}

impl From<GroupKind> for String {
    fn from(kind: GroupKind) -> Self {
        kind.name().to_string()
    }
}

/// Where a row sits in the table structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPosition {
    /// Group the row came from
    pub group: GroupKind,
    /// Ordinal of the group among non-empty groups
    pub group_index: usize,
    /// Index of the row within its group
    pub index_in_group: usize,
    /// Index of the row within the whole table
    pub row_index: usize,
}

/// Classification of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowTag {
    /// The table's only row
    SoleRow,
    /// The row the Markdown divider follows
    HeaderRow,
    /// First row after the header
    FirstBodyRow,
    /// Any other row
    BodyRow,
    /// Row from an unrecognised group; emitted as a body row
    Unclassified,
}

impl RowTag {
    /// Whether the Markdown divider goes after this row
    pub fn ends_header(&self) -> bool {
        matches!(self, RowTag::SoleRow | RowTag::HeaderRow)
    }
}

/// Table-wide facts the predicates need
#[derive(Debug, Clone, Copy, Default)]
struct Layout {
    total_rows: usize,
    /// Group index of the first header group
    header_group: Option<usize>,
    /// Group index of the body group directly after the header group
    first_body_group: Option<usize>,
}

impl Layout {
    fn scan(positions: &[RowPosition]) -> Self {
        let header_group = positions
            .iter()
            .find(|p| p.group == GroupKind::Header)
            .map(|p| p.group_index);

        let first_body_group = header_group.and_then(|header| {
            positions
                .iter()
                .find(|p| p.group_index == header + 1)
                .filter(|p| p.group.is_body_like())
                .map(|p| p.group_index)
        });

        Layout {
            total_rows: positions.len(),
            header_group,
            first_body_group,
        }
    }
}

/// Whether a table with `total_rows` rows consists of a single row
pub fn is_sole_row(total_rows: usize) -> bool {
    total_rows == 1
}

/// Whether the row opens the table's header.
///
/// That is the first row of the first header group, or the first row of
/// the table when there is no header group.
pub fn is_first_of_header_group(position: &RowPosition, header_group: Option<usize>) -> bool {
    match header_group {
        Some(group) => position.group_index == group && position.index_in_group == 0,
        None => position.row_index == 0,
    }
}

/// Whether the row opens the body that follows the header.
///
/// That is the first row of the body group directly after the header group,
/// or the second row of the table when there is no header group.
pub fn is_first_of_first_body_group(
    position: &RowPosition,
    header_group: Option<usize>,
    first_body_group: Option<usize>,
) -> bool {
    match header_group {
        Some(_) => {
            first_body_group == Some(position.group_index) && position.index_in_group == 0
        }
        None => position.row_index == 1,
    }
}

fn classify_in(position: &RowPosition, layout: &Layout) -> RowTag {
    if let GroupKind::Unknown(_) = position.group {
        return RowTag::Unclassified;
    }

    if is_sole_row(layout.total_rows) {
        RowTag::SoleRow
    } else if is_first_of_header_group(position, layout.header_group) {
        RowTag::HeaderRow
    } else if is_first_of_first_body_group(position, layout.header_group, layout.first_body_group)
    {
        RowTag::FirstBodyRow
    } else {
        RowTag::BodyRow
    }
}

/// Tag every row of a flattened table, in order
pub fn classify_rows(positions: &[RowPosition]) -> Vec<RowTag> {
    let layout = Layout::scan(positions);
    positions
        .iter()
        .map(|position| classify_in(position, &layout))
        .collect()
}
