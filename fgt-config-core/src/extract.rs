use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::matcher::{
    matches_block_start, matches_edit, matches_end, matches_next, matches_set, BlockPattern,
};
use crate::record::{Extraction, KeyOrder, Record, NAME_KEY};

/// Errors that can occur while extracting records from a configuration export.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Failed to open or read the input.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// A line was not valid UTF-8.
    #[error("invalid UTF-8 on line {line}: {source}")]
    Utf8 {
        line: usize,
        source: std::str::Utf8Error,
    },
    /// A block-start pattern did not compile.
    #[error("invalid block pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    /// A block-start pattern was built from nothing.
    #[error("block pattern must not be empty")]
    EmptyPattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Outside,
    InBlock,
}

/// Transient state for one pass over the input.
#[derive(Debug)]
struct ParseState<'p> {
    pattern: &'p BlockPattern,
    block: BlockState,
    current: Record,
    key_order: KeyOrder,
    records: Vec<Record>,
    lines_read: usize,
}

impl<'p> ParseState<'p> {
    fn new(pattern: &'p BlockPattern) -> Self {
        Self {
            pattern,
            block: BlockState::Outside,
            current: Record::new(),
            key_order: KeyOrder::default(),
            records: Vec::new(),
            lines_read: 0,
        }
    }

    fn feed(&mut self, line: &str) {
        self.lines_read += 1;

        // A repeated start line does not reset the record being built.
        if matches_block_start(line, self.pattern) {
            self.block = BlockState::InBlock;
        }

        if self.block == BlockState::InBlock {
            if let Some(name) = matches_edit(line) {
                self.current.insert(NAME_KEY.to_string(), name.to_string());
                self.key_order.observe(NAME_KEY);
            }

            if let Some((key, value)) = matches_set(line) {
                self.key_order.observe(key);
                self.current.insert(key.to_string(), value);
            }

            if matches_next(line) {
                self.records.push(std::mem::take(&mut self.current));
            }
        }

        // Checked on every line; an inner sub-block `end` also closes the block.
        if matches_end(line) {
            self.block = BlockState::Outside;
        }
    }

    fn finish(self) -> Extraction {
        if !self.current.is_empty() {
            debug!(
                pattern = self.pattern.label(),
                keys = self.current.len(),
                "discarding record without terminating next"
            );
        }

        debug!(
            pattern = self.pattern.label(),
            records = self.records.len(),
            keys = self.key_order.len(),
            lines = self.lines_read,
            "block extraction finished"
        );

        Extraction {
            records: self.records,
            key_order: self.key_order,
            lines_read: self.lines_read,
        }
    }
}

/// Extract every record of the block selected by `pattern` from `reader`.
///
/// The whole stream is consumed in a single pass. Lines that match none of
/// the directives are skipped. The first line that is not valid UTF-8 aborts
/// the pass.
pub fn extract_reader<R: BufRead>(
    mut reader: R,
    pattern: &BlockPattern,
) -> Result<Extraction, ExtractError> {
    let mut state = ParseState::new(pattern);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = std::str::from_utf8(&buf).map_err(|source| ExtractError::Utf8 {
            line: state.lines_read + 1,
            source,
        })?;
        state.feed(trim_line(line));
    }

    Ok(state.finish())
}

/// Extract the block selected by `pattern` from in-memory text.
pub fn extract_str(input: &str, pattern: &BlockPattern) -> Extraction {
    let mut state = ParseState::new(pattern);
    for line in input.lines() {
        state.feed(trim_line(line));
    }
    state.finish()
}

/// Extract the block selected by `pattern` from the file at `path`.
pub fn extract_file(path: &Path, pattern: &BlockPattern) -> Result<Extraction, ExtractError> {
    let file = File::open(path)?;
    extract_reader(BufReader::new(file), pattern)
}

/// Strip surrounding ASCII whitespace only; Unicode spaces such as U+00A0
/// stay part of the line and can make a directive fail to match.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}
