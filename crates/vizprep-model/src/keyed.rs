//! Region-keyed signed values for choropleth maps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Normalizes a region key for lookup: trimmed and lowercased.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedValue {
    /// Normalized lookup key.
    pub key: String,
    /// Key as it appeared in the source.
    pub label: String,
    /// Parsed value; `None` when the cell was not a number.
    pub value: Option<f64>,
}

/// Ordered key → value mapping.
///
/// A repeated key keeps its first position and takes the later value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedValues {
    entries: Vec<KeyedValue>,
    /// Normalized key → position in `entries`.
    index: HashMap<String, usize>,
}

impl KeyedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str, value: Option<f64>) {
        let key = normalize_key(label);
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].value = value;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(KeyedValue {
            key,
            label: label.trim().to_string(),
            value,
        });
    }

    /// Looks up a value by any spelling of its key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.index
            .get(&normalize_key(key))
            .and_then(|&idx| self.entries[idx].value)
    }

    pub fn entries(&self) -> &[KeyedValue] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finite values only, in entry order.
    pub fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries
            .iter()
            .filter_map(|e| e.value)
            .filter(|v| v.is_finite())
    }
}
