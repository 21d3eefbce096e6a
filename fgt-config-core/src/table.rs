//! Name-indexed tables built from extraction results.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::record::{Extraction, NAME_KEY};

/// Options controlling how an [`Extraction`] becomes a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Record key whose value identifies each row.
    pub index_key: String,
    /// Columns removed from the output. Unknown names are ignored.
    pub drop_columns: Vec<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            index_key: NAME_KEY.to_string(),
            drop_columns: Vec::new(),
        }
    }
}

impl TableOptions {
    pub fn with_drop_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop_columns.extend(columns.into_iter().map(Into::into));
        self
    }
}

/// One table row. `None` cells are missing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub index: String,
    pub cells: Vec<Option<String>>,
}

/// Tabular view of one configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub index_key: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Build a table from an extraction.
    ///
    /// Rows are indexed by `options.index_key`. When two records share an
    /// index value the later one replaces the earlier one's cells in place.
    /// Blank values and keys a record never set become missing cells.
    pub fn from_extraction(extraction: &Extraction, options: &TableOptions) -> Self {
        let columns: Vec<String> = extraction
            .key_order
            .iter()
            .filter(|key| *key != options.index_key)
            .filter(|key| !options.drop_columns.iter().any(|d| d.as_str() == *key))
            .map(ToOwned::to_owned)
            .collect();

        let mut rows: Vec<Row> = Vec::with_capacity(extraction.records.len());
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in &extraction.records {
            let Some(index) = record.get(&options.index_key) else {
                warn!(
                    index_key = %options.index_key,
                    keys = record.len(),
                    "skipping record without index key"
                );
                continue;
            };

            let cells = columns
                .iter()
                .map(|column| {
                    record
                        .get(column)
                        .filter(|value| !value.trim().is_empty())
                        .cloned()
                })
                .collect();
            let row = Row {
                index: index.clone(),
                cells,
            };

            match positions.get(index) {
                Some(&pos) => rows[pos] = row,
                None => {
                    positions.insert(index.clone(), rows.len());
                    rows.push(row);
                }
            }
        }

        Self {
            index_key: options.index_key.clone(),
            columns,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Return the row indexed by `index`.
    pub fn row(&self, index: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.index == index)
    }

    /// Return a single cell, or `None` when the row, column or value is missing.
    pub fn cell(&self, index: &str, column: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.row(index)?.cells.get(col)?.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Table, TableOptions};
    use crate::extract::extract_str;
    use crate::matcher::BlockPattern;

    fn extraction(input: &str) -> crate::record::Extraction {
        let pattern = BlockPattern::from_header("config firewall address").expect("pattern");
        extract_str(input, &pattern)
    }

    #[test]
    fn builds_rows_indexed_by_name() {
        let ex = extraction(
            r#"config firewall address
edit "a"
set subnet 10.0.0.1/32
next
edit "b"
set fqdn "b.example"
next
end"#,
        );
        let table = Table::from_extraction(&ex, &TableOptions::default());
        assert_eq!(table.index_key, "name");
        assert_eq!(table.columns, vec!["subnet", "fqdn"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell("a", "subnet"), Some("10.0.0.1/32"));
        assert_eq!(table.cell("a", "fqdn"), None);
        assert_eq!(table.cell("b", "fqdn"), Some("b.example"));
    }

    #[test]
    fn duplicate_names_last_wins_in_first_position() {
        let ex = extraction(
            r#"config firewall address
edit "dup"
set comment first
next
edit "other"
next
edit "dup"
set comment second
next
end"#,
        );
        let table = Table::from_extraction(&ex, &TableOptions::default());
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].index, "dup");
        assert_eq!(table.cell("dup", "comment"), Some("second"));
    }

    #[test]
    fn blank_values_become_missing() {
        let ex = extraction("config firewall address\nedit \"a\"\nset comment \"\"\nset color \" \"\nnext\nend");
        let table = Table::from_extraction(&ex, &TableOptions::default());
        assert_eq!(table.rows[0].cells, vec![None::<String>, None]);
    }

    #[test]
    fn drop_columns_removed_and_unknown_ignored() {
        let ex = extraction(
            "config firewall address\nedit \"a\"\nset associated-interface port1\nset subnet 1.1.1.1/32\nnext\nend",
        );
        let options =
            TableOptions::default().with_drop_columns(["associated-interface", "not-there"]);
        let table = Table::from_extraction(&ex, &options);
        assert_eq!(table.columns, vec!["subnet"]);
    }

    #[test]
    fn records_without_index_are_skipped() {
        let ex = extraction("config firewall address\nset color 1\nnext\nedit \"a\"\nnext\nend");
        let table = Table::from_extraction(&ex, &TableOptions::default());
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].index, "a");
    }

    #[test]
    fn empty_extraction_gives_empty_table() {
        let ex = extraction("config firewall address\nend");
        let table = Table::from_extraction(&ex, &TableOptions::default());
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }
}
