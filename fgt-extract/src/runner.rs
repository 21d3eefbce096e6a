//! One extraction pass per catalog section.
//!
//! Each section re-reads the input from the start, so extracting the five
//! built-in sections means five independent passes over the file.

use std::path::Path;

use fgt_config_core::{extract_file, format_summary, ExtractError, Table, TableOptions};
use serde::Serialize;
use tracing::info;

use crate::catalog::SectionDef;

/// Table and pass statistics for one extracted section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionOutput {
    pub id: String,
    pub stem: String,
    pub records: usize,
    pub lines_read: usize,
    pub table: Table,
}

/// Extract one section from `input` and build its table.
///
/// `extra_drop` columns are removed in addition to the section's own
/// `drop_columns`.
pub fn run_section(
    input: &Path,
    section: &SectionDef,
    extra_drop: &[String],
) -> Result<SectionOutput, ExtractError> {
    let pattern = section.pattern()?;
    let extraction = extract_file(input, &pattern)?;

    let options = TableOptions::default()
        .with_drop_columns(section.drop_columns.iter().cloned())
        .with_drop_columns(extra_drop.iter().cloned());
    let table = Table::from_extraction(&extraction, &options);

    info!(
        section = %section.id,
        rows = table.len(),
        columns = table.columns.len(),
        "extracted section: {}",
        format_summary(&extraction)
    );

    Ok(SectionOutput {
        id: section.id.clone(),
        stem: section.stem.clone(),
        records: extraction.records.len(),
        lines_read: extraction.lines_read,
        table,
    })
}

/// Extract every section in `sections`, stopping at the first failure.
pub fn run_sections(
    input: &Path,
    sections: &[&SectionDef],
) -> Result<Vec<SectionOutput>, ExtractError> {
    sections
        .iter()
        .map(|section| run_section(input, section, &[]))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{run_section, run_sections};
    use crate::catalog::{default_catalog, find_section};

    fn sample() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("fixtures/fortigate-sample.conf")
    }

    #[test]
    fn address_section_drops_associated_interface() {
        let catalog = default_catalog();
        let address = find_section(&catalog, "address").expect("address section");
        let out = run_section(&sample(), address, &[]).expect("run");

        assert_eq!(out.records, 4);
        assert!(!out.table.columns.iter().any(|c| c == "associated-interface"));
        assert_eq!(out.table.cell("fqdn-updates", "type"), Some("fqdn"));
    }

    #[test]
    fn extra_drop_columns_apply_on_top() {
        let catalog = default_catalog();
        let policy = find_section(&catalog, "policy").expect("policy section");
        let out = run_section(&sample(), policy, &["uuid".to_string()]).expect("run");

        assert!(!out.table.columns.iter().any(|c| c == "uuid"));
        assert_eq!(out.table.cell("2", "nat"), Some("enable"));
    }

    #[test]
    fn runs_all_builtin_sections() {
        let catalog = default_catalog();
        let all: Vec<_> = catalog.iter().collect();
        let outputs = run_sections(&sample(), &all).expect("run");

        let counts: Vec<(&str, usize)> = outputs
            .iter()
            .map(|o| (o.id.as_str(), o.table.len()))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("address", 4),
                ("addrgrp", 2),
                ("service", 3),
                ("service-group", 2),
                ("policy", 3),
            ]
        );
    }
}
