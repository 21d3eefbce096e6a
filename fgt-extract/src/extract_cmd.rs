use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use fgt_config_core::{format_csv, format_json};
use fgt_extract::catalog::{find_section, SectionDef};
use fgt_extract::report::render_section_line;
use fgt_extract::runner::run_sections;
use tracing::info;

use crate::cli::{ExportFormat, ExtractArgs};
use crate::path_guard;

pub fn run_extract(args: ExtractArgs) -> Result<()> {
    let (catalog, source) = crate::resolve_catalog(args.sections_file.as_deref());
    info!(sections = catalog.len(), %source, "using section catalog");
    let selected = select_sections(&catalog, &args.sections)?;

    let targets: Vec<PathBuf> = selected
        .iter()
        .map(|s| {
            args.output_dir
                .join(format!("{}.{}", s.stem, args.format.extension()))
        })
        .collect();
    for target in &targets {
        path_guard::ensure_output_not_input(target, &args.file)?;
    }

    let outputs = run_sections(&args.file, &selected)
        .with_context(|| format!("failed to extract {}", args.file.display()))?;

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    println!(
        "{}",
        format!(
            "extracted {} section(s) from {}",
            outputs.len(),
            args.file.display()
        )
        .cyan()
    );
    for (output, target) in outputs.iter().zip(&targets) {
        let body = match args.format {
            ExportFormat::Csv => format_csv(&output.table),
            ExportFormat::Json => format_json(&output.table),
        };
        fs::write(target, body)
            .with_context(|| format!("failed to write {}", target.display()))?;
        println!(
            "{}",
            render_section_line(output, &target.display().to_string())
        );
    }

    Ok(())
}

fn select_sections<'a>(catalog: &'a [SectionDef], ids: &[String]) -> Result<Vec<&'a SectionDef>> {
    if ids.is_empty() {
        return Ok(catalog.iter().collect());
    }

    let mut selected: Vec<&SectionDef> = Vec::with_capacity(ids.len());
    for id in ids {
        let Some(section) = find_section(catalog, id) else {
            bail!(
                "unknown section '{}'; available: {}",
                id,
                section_ids(catalog)
            );
        };
        if !selected.iter().any(|s| s.id == section.id) {
            selected.push(section);
        }
    }
    Ok(selected)
}

pub(crate) fn section_ids(catalog: &[SectionDef]) -> String {
    catalog
        .iter()
        .map(|s| s.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
