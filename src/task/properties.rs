//! Shared Property Table
//!
//! The key-to-string mapping a build process shares across its steps.
//! Tasks write results into the table; the table itself is owned by the
//! host. Properties accumulate over a build and are never removed.

use std::collections::HashMap;

/// Mutable key-value store for build properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTable {
    properties: HashMap<String, String>,
}

impl PropertyTable {
    /// Create a new empty property table
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
        }
    }

    /// Set a property, overwriting any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Set a property only if it has no value yet
    ///
    /// Returns true when the value was written. The first writer wins;
    /// later writes under the same key are ignored.
    pub fn set_new(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.properties.contains_key(&key) {
            log::debug!("Property '{}' already set, keeping existing value", key);
            return false;
        }
        self.properties.insert(key, value.into());
        true
    }

    /// Get a property value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|v| v.as_str())
    }

    /// Check if a property exists
    pub fn contains_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Get list of all property names
    pub fn property_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.properties.keys().cloned().collect();
        names.sort();
        names
    }

    /// Total count of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when the table holds no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_empty() {
        let table = PropertyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.get("anything"), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut table = PropertyTable::new();
        table.set("build.version", "4.7.2");

        assert_eq!(table.get("build.version"), Some("4.7.2"));
        assert!(table.contains_property("build.version"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let mut table = PropertyTable::new();
        table.set("build.version.patch", "2");
        table.set("build.version.patch", "9");

        assert_eq!(table.get("build.version.patch"), Some("9"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_set_new_first_writer_wins() {
        let mut table = PropertyTable::new();

        assert!(table.set_new("build.version", "4.7.2"));
        assert!(!table.set_new("build.version", "0.0.0"));
        assert_eq!(table.get("build.version"), Some("4.7.2"));
    }

    #[test]
    fn test_property_names_are_sorted() {
        let mut table = PropertyTable::new();
        table.set("build.version.patch", "2");
        table.set("build.version", "4.7.2");
        table.set("build.version.major", "4");

        assert_eq!(
            table.property_names(),
            vec![
                "build.version".to_string(),
                "build.version.major".to_string(),
                "build.version.patch".to_string(),
            ]
        );
    }
}
