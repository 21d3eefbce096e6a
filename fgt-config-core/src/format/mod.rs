//! Table output formatters.

pub mod csv;
pub mod json;
pub mod text;

pub use csv::format_csv;
pub use json::format_json;
pub use text::{format_summary, format_text};
