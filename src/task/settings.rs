//! Task Settings
//!
//! Attribute overrides handed to a task by the enclosing build file,
//! parsed from `key=value` strings into a map. This is the only runtime
//! configuration surface a task sees.

use crate::task::error::{TaskError, TaskResult};
use std::collections::HashMap;

/// Attribute settings for a single task invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskSettings {
    /// Parsed key-value attributes
    attributes: HashMap<String, String>,
}

impl TaskSettings {
    /// Create empty settings (no overrides)
    pub fn new() -> Self {
        Self {
            attributes: HashMap::new(),
        }
    }

    /// Parse settings from `key=value` attribute strings
    ///
    /// Values may contain `=`. A later duplicate of a key overwrites the
    /// earlier value.
    pub fn parse(attributes: &[String]) -> TaskResult<Self> {
        let mut settings = Self::new();
        for attribute in attributes {
            match attribute.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    settings.attributes.insert(key.to_string(), value.to_string());
                }
                _ => {
                    return Err(TaskError::Generic {
                        message: format!(
                            "Invalid attribute format: '{}'. Use key=value.",
                            attribute
                        ),
                    });
                }
            }
        }
        Ok(settings)
    }

    /// Set a single attribute
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get an attribute value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|v| v.as_str())
    }

    /// Get list of all attribute names
    pub fn attribute_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.attributes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Total count of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True when no attributes were given
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
