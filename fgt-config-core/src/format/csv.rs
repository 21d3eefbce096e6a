use crate::table::Table;

/// Format a table as CSV with the index column first.
///
/// Missing cells are written as empty fields. An empty table produces an
/// empty string.
pub fn format_csv(table: &Table) -> String {
    if table.is_empty() && table.columns.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let header = std::iter::once(table.index_key.as_str())
        .chain(table.columns.iter().map(String::as_str));
    push_line(&mut out, header);

    for row in &table.rows {
        let fields = std::iter::once(row.index.as_str())
            .chain(row.cells.iter().map(|c| c.as_deref().unwrap_or("")));
        push_line(&mut out, fields);
    }
    out
}

fn push_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let line = fields.map(escape_field).collect::<Vec<_>>().join(",");
    out.push_str(&line);
    out.push('\n');
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
