//! Block-structured FortiGate configuration parsing primitives.
//!
//! A FortiGate export nests objects in `config ... end` blocks, one
//! `edit "name" ... next` unit per object with `set key value` lines in
//! between. This crate recognizes those directives line by line, flattens each
//! object of one block into a [`Record`], and turns the result into a
//! name-indexed [`Table`] for export.

pub mod extract;
pub mod format;
pub mod matcher;
pub mod record;
pub mod table;

pub use extract::{extract_file, extract_reader, extract_str, ExtractError};
pub use format::{format_csv, format_json, format_summary, format_text};
pub use matcher::BlockPattern;
pub use record::{Extraction, KeyOrder, Record, NAME_KEY};
pub use table::{Row, Table, TableOptions};
