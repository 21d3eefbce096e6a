use crate::record::Extraction;
use crate::table::Table;

const MISSING: &str = "-";

/// Format a table as an aligned plain-text grid.
pub fn format_text(table: &Table) -> String {
    let header: Vec<&str> = std::iter::once(table.index_key.as_str())
        .chain(table.columns.iter().map(String::as_str))
        .collect();
    let body: Vec<Vec<&str>> = table
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.index.as_str())
                .chain(row.cells.iter().map(|c| c.as_deref().unwrap_or(MISSING)))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, field) in widths.iter_mut().zip(row) {
            *width = (*width).max(field.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(body.len() + 1);
    lines.push(render_row(&header, &widths));
    for row in &body {
        lines.push(render_row(row, &widths));
    }
    lines.join("\n")
}

/// Format a one-line summary of an extraction.
pub fn format_summary(extraction: &Extraction) -> String {
    format!(
        "records={} keys={} lines={}",
        extraction.records.len(),
        extraction.key_order.len(),
        extraction.lines_read
    )
}

fn render_row(fields: &[&str], widths: &[usize]) -> String {
    fields
        .iter()
        .zip(widths)
        .map(|(field, &width)| format!("{field:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{format_summary, format_text};
    use crate::record::Extraction;
    use crate::table::{Row, Table};

    #[test]
    fn aligns_columns_and_marks_missing() {
        let table = Table {
            index_key: "name".to_string(),
            columns: vec!["type".to_string()],
            rows: vec![
                Row {
                    index: "long-name".to_string(),
                    cells: vec![None],
                },
                Row {
                    index: "a".to_string(),
                    cells: vec![Some("fqdn".to_string())],
                },
            ],
        };
        assert_eq!(
            format_text(&table),
            "name       type\nlong-name  -\na          fqdn"
        );
    }

    #[test]
    fn summary_counts() {
        let summary = format_summary(&Extraction::default());
        assert_eq!(summary, "records=0 keys=0 lines=0");
    }
}
