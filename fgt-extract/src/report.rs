use colored::Colorize;
use fgt_config_core::{format_text, Table};

use crate::catalog::SectionDef;
use crate::runner::SectionOutput;

/// Render a table for terminal output with a highlighted header row.
pub fn render_table(table: &Table) -> String {
    if table.is_empty() {
        return "(no records)".dimmed().to_string();
    }

    let raw = format_text(table);
    let mut out = Vec::new();
    for (i, line) in raw.lines().enumerate() {
        if i == 0 {
            out.push(line.bold().to_string());
        } else {
            out.push(line.to_string());
        }
    }
    out.join("\n")
}

/// Render one summary line for a written section.
pub fn render_section_line(output: &SectionOutput, destination: &str) -> String {
    let counts = format!(
        "rows={} records={} columns={}",
        output.table.len(),
        output.records,
        output.table.columns.len()
    );
    let counts = if output.table.is_empty() {
        counts.yellow().to_string()
    } else {
        counts.green().to_string()
    };
    format!("- {}: {} -> {}", output.id, counts, destination)
}

/// Render the section catalog.
pub fn render_catalog(catalog: &[SectionDef], source: &str) -> String {
    let mut out = Vec::new();
    out.push(format!("sections source={source}").cyan().to_string());
    for section in catalog {
        out.push(format!("- {}: {}", section.id, section.description));
        append_list_with_prefix(&mut out, "  header: ", &section.headers);
        out.push(format!("  output: {}", section.stem));
        append_list_with_prefix(&mut out, "  drop: ", &section.drop_columns);
    }
    out.join("\n")
}

fn append_list_with_prefix(out: &mut Vec<String>, prefix: &str, items: &[String]) {
    if items.is_empty() {
        out.push(format!("{prefix}none"));
        return;
    }
    for item in items {
        out.push(format!("{prefix}{item}"));
    }
}
