use anyhow::{bail, Context, Result};
use fgt_config_core::{format_csv, format_json};
use fgt_extract::catalog::find_section;
use fgt_extract::report::render_table;
use fgt_extract::runner::run_section;

use crate::cli::{ShowArgs, ShowFormat};
use crate::extract_cmd::section_ids;

pub fn run_show(args: ShowArgs) -> Result<()> {
    let (catalog, _) = crate::resolve_catalog(args.sections_file.as_deref());
    let Some(section) = find_section(&catalog, &args.section) else {
        bail!(
            "unknown section '{}'; available: {}",
            args.section,
            section_ids(&catalog)
        );
    };

    let output = run_section(&args.file, section, &args.drop_columns)
        .with_context(|| format!("failed to extract {}", args.file.display()))?;

    match args.format {
        ShowFormat::Text => println!("{}", render_table(&output.table)),
        ShowFormat::Csv => print!("{}", format_csv(&output.table)),
        ShowFormat::Json => println!("{}", format_json(&output.table)),
    }
    Ok(())
}
