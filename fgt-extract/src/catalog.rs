use std::fs;
use std::path::Path;

use fgt_config_core::{BlockPattern, ExtractError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One configuration section that can be extracted into a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDef {
    pub id: String,
    pub headers: Vec<String>,
    pub stem: String,
    #[serde(default)]
    pub drop_columns: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl SectionDef {
    /// Compile the block-start pattern for this section's headers.
    pub fn pattern(&self) -> Result<BlockPattern, ExtractError> {
        BlockPattern::from_headers(&self.headers)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    section: Vec<SectionDef>,
}

/// Errors returned when loading a section catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read sections file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse sections file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("sections file {path} defines no sections")]
    Empty { path: String },
    #[error("sections file {path} defines section '{id}' more than once")]
    Duplicate { path: String, id: String },
    #[error("sections file {path} writes output stem '{stem}' from more than one section")]
    DuplicateStem { path: String, stem: String },
}

/// Load a section catalog from a TOML file.
pub fn load_catalog(path: &Path) -> Result<Vec<SectionDef>, CatalogLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_catalog(&raw, path.display().to_string())
}

/// Built-in catalog of the five firewall object sections.
pub fn default_catalog() -> Vec<SectionDef> {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/catalog/sections.toml"
    ));
    parse_catalog(embedded, "embedded sections".to_string())
        .unwrap_or_else(|_| fallback_catalog())
}

/// Look up a section by id.
pub fn find_section<'a>(catalog: &'a [SectionDef], id: &str) -> Option<&'a SectionDef> {
    catalog.iter().find(|s| s.id == id)
}

fn parse_catalog(raw: &str, path: String) -> Result<Vec<SectionDef>, CatalogLoadError> {
    let parsed: CatalogFile = toml::from_str(raw).map_err(|source| CatalogLoadError::Parse {
        path: path.clone(),
        source,
    })?;

    if parsed.section.is_empty() {
        return Err(CatalogLoadError::Empty { path });
    }
    for (i, section) in parsed.section.iter().enumerate() {
        if parsed.section[..i].iter().any(|s| s.id == section.id) {
            return Err(CatalogLoadError::Duplicate {
                path,
                id: section.id.clone(),
            });
        }
        if parsed.section[..i].iter().any(|s| s.stem == section.stem) {
            return Err(CatalogLoadError::DuplicateStem {
                path,
                stem: section.stem.clone(),
            });
        }
    }
    Ok(parsed.section)
}

fn fallback_catalog() -> Vec<SectionDef> {
    let section = |id: &str, headers: &[&str], drop: &[&str], description: &str| SectionDef {
        id: id.to_string(),
        headers: headers.iter().map(|h| h.to_string()).collect(),
        stem: id.to_string(),
        drop_columns: drop.iter().map(|d| d.to_string()).collect(),
        description: description.to_string(),
    };

    vec![
        section(
            "address",
            &["config firewall address"],
            &["associated-interface"],
            "Firewall address objects",
        ),
        section(
            "addrgrp",
            &["config firewall addrgrp"],
            &[],
            "Firewall address groups",
        ),
        section(
            "service",
            &["config firewall service custom", "config firewall service"],
            &["comment"],
            "Custom firewall services",
        ),
        section(
            "service-group",
            &["config firewall service group"],
            &[],
            "Firewall service groups",
        ),
        section(
            "policy",
            &["config firewall policy"],
            &[],
            "IPv4 firewall policies",
        ),
    ]
}
