use indexmap::IndexMap;

use crate::table::Table;

/// Format a table as a JSON array of objects, missing cells as `null`.
pub fn format_json(table: &Table) -> String {
    let rows: Vec<IndexMap<&str, Option<&str>>> = table
        .rows
        .iter()
        .map(|row| {
            let mut object = IndexMap::with_capacity(table.columns.len() + 1);
            object.insert(table.index_key.as_str(), Some(row.index.as_str()));
            for (column, cell) in table.columns.iter().zip(&row.cells) {
                object.insert(column.as_str(), cell.as_deref());
            }
            object
        })
        .collect();
    serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
}
