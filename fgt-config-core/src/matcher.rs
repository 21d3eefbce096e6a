//! Single-line recognizers for the `config` / `edit` / `set` / `next` / `end`
//! directives of a FortiGate configuration export.
//!
//! Every function expects a line that has already been trimmed. Matching is
//! case-insensitive and anchored at the start of the line.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::extract::ExtractError;

static EDIT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^\s*edit\s+"(?P<name>.*)"$"#).expect("edit pattern is valid")
});

static SET_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*set\s+(?P<key>\S+)\s+(?P<value>.*)$").expect("set pattern is valid")
});

/// Compiled start-of-block recognizer for one configuration section.
#[derive(Debug, Clone)]
pub struct BlockPattern {
    regex: Regex,
    label: String,
}

impl BlockPattern {
    /// Build a pattern matching a literal section header such as
    /// `config firewall address`.
    ///
    /// Header words are matched literally with any run of whitespace between
    /// them, and the header must make up the whole line.
    pub fn from_header(header: &str) -> Result<Self, ExtractError> {
        Self::from_headers(&[header])
    }

    /// Build a pattern matching any one of several literal section headers.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self, ExtractError> {
        let alternatives: Vec<String> = headers
            .iter()
            .map(|h| {
                h.as_ref()
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .filter(|alt| !alt.is_empty())
            .collect();

        if alternatives.is_empty() {
            return Err(ExtractError::EmptyPattern);
        }

        let label = headers
            .iter()
            .map(|h| h.as_ref().trim())
            .collect::<Vec<_>>()
            .join(" | ");
        let source = format!(r"^\s*(?:{})\s*$", alternatives.join("|"));
        Self::compile(&source, label)
    }

    /// Build a pattern from a caller-supplied regular expression.
    ///
    /// The expression is anchored to the whole line and matched
    /// case-insensitively, so `config firewall policy` and
    /// `^\s*config firewall policy$` behave the same.
    pub fn from_regex(pattern: &str) -> Result<Self, ExtractError> {
        if pattern.trim().is_empty() {
            return Err(ExtractError::EmptyPattern);
        }
        Self::compile(&format!("^(?:{pattern})$"), pattern.to_string())
    }

    fn compile(source: &str, label: String) -> Result<Self, ExtractError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|err| ExtractError::InvalidPattern {
                pattern: label.clone(),
                source: err,
            })?;
        Ok(Self { regex, label })
    }

    /// Human-readable form of the pattern, used in logs and reports.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return true if `line` opens the block this pattern describes.
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Return true if `line` opens the block described by `pattern`.
pub fn matches_block_start(line: &str, pattern: &BlockPattern) -> bool {
    pattern.matches(line)
}

/// Match `edit "<name>"` and return the quoted object name verbatim.
pub fn matches_edit(line: &str) -> Option<&str> {
    EDIT_LINE
        .captures(line)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}

/// Match `set <key> <value...>` and return the key plus the cleaned value.
///
/// The value is trimmed and every `"` is removed. This is lossy: escaped
/// quotes inside a value are stripped the same as delimiting ones.
pub fn matches_set(line: &str) -> Option<(&str, String)> {
    let caps = SET_LINE.captures(line)?;
    let key = caps.name("key")?.as_str();
    let value = caps.name("value")?.as_str();
    Some((key, strip_quotes(value)))
}

/// Return true if the whole line is `next`.
pub fn matches_next(line: &str) -> bool {
    line.eq_ignore_ascii_case("next")
}

/// Return true if the whole line is `end`.
pub fn matches_end(line: &str) -> bool {
    line.eq_ignore_ascii_case("end")
}

fn strip_quotes(value: &str) -> String {
    value.trim().replace('"', "")
}
