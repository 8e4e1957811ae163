//! Table input model
//!
//! A table arrives from the document extractor as an optional caption plus a
//! list of row groups. Groups are flattened into one row sequence before
//! reaching the grid builder; only the classifier looks at group origin.

use serde::{Deserialize, Serialize};

use super::table::{GroupKind, RowPosition, SourceCell, SourceRow};

/// A group of rows sharing a structural parent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowGroup {
    /// Structural origin of the group
    #[serde(default, with = "group_kind_name")]
    pub kind: GroupKind,
    /// Rows, top to bottom
    #[serde(default)]
    pub rows: Vec<SourceRow>,
}

impl RowGroup {
    pub fn new(kind: GroupKind, rows: Vec<SourceRow>) -> Self {
        RowGroup { kind, rows }
    }

    pub fn header(rows: Vec<SourceRow>) -> Self {
        RowGroup::new(GroupKind::Header, rows)
    }

    pub fn body(rows: Vec<SourceRow>) -> Self {
        RowGroup::new(GroupKind::Body, rows)
    }

    pub fn footer(rows: Vec<SourceRow>) -> Self {
        RowGroup::new(GroupKind::Footer, rows)
    }
}

/// A table as handed over by the extractor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableSource {
    /// Caption text, if the table had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Row groups in document order
    #[serde(default)]
    pub groups: Vec<RowGroup>,
}

/// A row borrowed from a [`TableSource`] together with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow<'a> {
    pub cells: &'a [SourceCell],
    pub position: RowPosition,
}

impl TableSource {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// A table whose rows sit directly under the table element
    pub fn from_rows(rows: Vec<SourceRow>) -> Self {
        TableSource {
            caption: None,
            groups: vec![RowGroup::new(GroupKind::Root, rows)],
        }
    }

    /// Set the caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Append a row group
    pub fn with_group(mut self, group: RowGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Total number of rows across all groups
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &SourceRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    /// Flatten groups into one row sequence.
    ///
    /// Empty groups are skipped and do not take a group index, so a body
    /// group after an empty one still counts as following the header.
    pub fn flatten(&self) -> Vec<FlatRow<'_>> {
        let mut flat = Vec::with_capacity(self.row_count());

        for (group_index, group) in self.groups.iter().filter(|g| !g.rows.is_empty()).enumerate()
        {
            for (index_in_group, row) in group.rows.iter().enumerate() {
                let row_index = flat.len();
                flat.push(FlatRow {
                    cells: row.as_slice(),
                    position: RowPosition {
                        group: group.kind.clone(),
                        group_index,
                        index_in_group,
                        row_index,
                    },
                });
            }
        }

        flat
    }
}

/// Group kinds travel as plain element names (`thead`, `tbody`, ...)
mod group_kind_name {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::table::GroupKind;

    pub fn serialize<S: Serializer>(kind: &GroupKind, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(kind.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<GroupKind, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(GroupKind::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_positions() {
        let table = TableSource::new()
            .with_group(RowGroup::header(vec![vec![SourceCell::header("H")]]))
            .with_group(RowGroup::body(vec![]))
            .with_group(RowGroup::body(vec![
                vec![SourceCell::new("a")],
                vec![SourceCell::new("b")],
            ]))
            .with_group(RowGroup::footer(vec![vec![SourceCell::new("f")]]));

        let flat = table.flatten();
        assert_eq!(flat.len(), 4);
        assert_eq!(table.row_count(), 4);

        let groups: Vec<usize> = flat.iter().map(|r| r.position.group_index).collect();
        assert_eq!(groups, vec![0, 1, 1, 2]);

        let in_group: Vec<usize> = flat.iter().map(|r| r.position.index_in_group).collect();
        assert_eq!(in_group, vec![0, 0, 1, 0]);

        assert_eq!(flat[3].position.group, GroupKind::Footer);
        assert_eq!(flat[3].position.row_index, 3);
        assert_eq!(flat[2].cells[0].content, "b");
    }

    #[test]
    fn test_deserialize_table() {
        let json = r#"{
            "caption": "Scores",
            "groups": [
                {"kind": "thead", "rows": [[{"content": "Name", "isHeader": true}]]},
                {"kind": "tbody", "rows": [[{"content": "Ada", "colspan": 2}]]},
                {"kind": "marquee", "rows": []},
                {"rows": [[{"content": "loose"}]]}
            ]
        }"#;

        let table: TableSource = serde_json::from_str(json).unwrap();
        assert_eq!(table.caption.as_deref(), Some("Scores"));
        assert_eq!(table.groups[0].kind, GroupKind::Header);
        assert!(table.groups[0].rows[0][0].is_header);
        assert_eq!(table.groups[1].rows[0][0].col_span, 2);
        assert_eq!(
            table.groups[2].kind,
            GroupKind::Unknown("marquee".to_string())
        );
        assert_eq!(table.groups[3].kind, GroupKind::Root);
    }

    #[test]
    fn test_from_rows() {
        let table = TableSource::from_rows(vec![vec![SourceCell::new("x")]]).with_caption("c");
        assert_eq!(table.groups.len(), 1);
        assert_eq!(table.groups[0].kind, GroupKind::Root);
        assert_eq!(table.rows().count(), 1);
        assert_eq!(table.caption.as_deref(), Some("c"));
    }
}
