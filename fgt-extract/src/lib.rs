//! FortiGate configuration export to tabular data.
//!
//! Built on `fgt-config-core`, which does the line-level parsing. This crate
//! adds the section catalog and per-section extraction runs used by the
//! `fgt-extract` binary.
//!
//! - [`catalog`]: the sections that can be extracted, embedded as TOML and
//!   overridable from a file
//! - [`runner`]: one extraction pass and table build per section
//! - [`report`]: terminal rendering of tables, summaries and the catalog

pub mod catalog;
pub mod report;
pub mod runner;
