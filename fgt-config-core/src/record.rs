use indexmap::IndexMap;
use serde::Serialize;

/// Key under which every record stores its `edit` object name.
pub const NAME_KEY: &str = "name";

/// One flattened `edit ... next` object, keys in insertion order.
pub type Record = IndexMap<String, String>;

/// Distinct keys in first-occurrence order across one extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyOrder(Vec<String>);

impl KeyOrder {
    /// Record `key`, appending it only the first time it is seen.
    pub fn observe(&mut self, key: &str) {
        if !self.contains(key) {
            self.0.push(key.to_string());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Result of one extraction pass for a single block pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Completed records in the order their `next` lines appeared.
    pub records: Vec<Record>,
    /// Column order for tabular output.
    pub key_order: KeyOrder,
    /// Number of input lines consumed.
    pub lines_read: usize,
}

impl Extraction {
    /// Return the first record whose `name` equals `name`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.get(NAME_KEY).map(String::as_str) == Some(name))
    }
}
