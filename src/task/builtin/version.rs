//! Version task
//!
//! Publishes the software version identifiers into the shared property
//! table so later build steps can read them as ordinary properties.

use crate::builtin;
use crate::core::version::VersionInfo;
use crate::task::api::{TaskError, TaskResult};
use crate::task::properties::PropertyTable;
use crate::task::settings::TaskSettings;
use crate::task::traits::BuildTask;
use crate::task::types::{DiscoveredTask, TaskInfo};

// Register this builtin task for automatic discovery
builtin!(|| DiscoveredTask {
    info: VersionTask::static_task_info(),
    factory: || Box::new(VersionTask::default()),
});

/// Property written with the major version number
pub const PROPERTY_VERSION_MAJOR: &str = "build.version.major";
/// Property written with the minor version number
pub const PROPERTY_VERSION_MINOR: &str = "build.version.minor";
/// Property written with the patch version number
pub const PROPERTY_VERSION_PATCH: &str = "build.version.patch";
/// Property written with the version display string
pub const PROPERTY_VERSION: &str = "build.version";

/// Task publishing version identifiers as build properties
///
/// Initialization copies the identifiers out of the injected
/// [`VersionInfo`]; the setters override individual fields afterwards,
/// unconditionally and without cross-checking the numeric triple against
/// the display string. Invocation writes whatever the fields hold at that
/// moment, verbatim, under the four fixed property names.
#[derive(Debug, Clone)]
pub struct VersionTask {
    initialized: bool,
    source: VersionInfo,
    major: u32,
    minor: u32,
    patch: u32,
    version: String,
}

impl VersionTask {
    /// Create a version task reading from the given version source
    pub fn new(source: VersionInfo) -> Self {
        Self {
            initialized: false,
            source,
            major: 0,
            minor: 0,
            patch: 0,
            version: String::new(),
        }
    }

    /// Get static task info without creating an instance
    pub fn static_task_info() -> TaskInfo {
        TaskInfo {
            name: "version".to_string(),
            version: "1.0.0".to_string(),
            description: "Publish version identifiers as build properties".to_string(),
            author: "Vertask".to_string(),
            api_version: crate::core::version::task_api_version(),
        }
    }

    /// Override the major version number
    pub fn set_major(&mut self, major: u32) {
        self.major = major;
    }

    /// Override the minor version number
    pub fn set_minor(&mut self, minor: u32) {
        self.minor = minor;
    }

    /// Override the patch version number
    pub fn set_patch(&mut self, patch: u32) {
        self.patch = patch;
    }

    /// Override the version display string
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    fn parse_numeric_attribute(name: &str, value: &str) -> TaskResult<u32> {
        value.parse::<u32>().map_err(|_| TaskError::Generic {
            message: format!(
                "Invalid value '{}' for attribute '{}': expected an unsigned integer",
                value, name
            ),
        })
    }
}

impl Default for VersionTask {
    fn default() -> Self {
        Self::new(VersionInfo::current())
    }
}

impl BuildTask for VersionTask {
    fn task_info(&self) -> TaskInfo {
        Self::static_task_info()
    }

    fn is_compatible(&self, host_api_version: u32) -> bool {
        host_api_version >= crate::core::version::task_api_version()
    }

    fn initialize(&mut self) -> TaskResult<()> {
        self.major = self.source.major;
        self.minor = self.source.minor;
        self.patch = self.source.patch;
        self.version = self.source.version.clone();
        self.initialized = true;
        log::trace!("VersionTask: initialized from version {}", self.source);
        Ok(())
    }

    fn configure(&mut self, settings: &TaskSettings) -> TaskResult<()> {
        for name in settings.attribute_names() {
            let value = settings.get(&name).unwrap_or_default();
            match name.as_str() {
                "major" => {
                    let major = Self::parse_numeric_attribute(&name, value)?;
                    self.set_major(major);
                }
                "minor" => {
                    let minor = Self::parse_numeric_attribute(&name, value)?;
                    self.set_minor(minor);
                }
                "patch" => {
                    let patch = Self::parse_numeric_attribute(&name, value)?;
                    self.set_patch(patch);
                }
                "version" => {
                    self.set_version(value);
                }
                _ => {
                    return Err(TaskError::Generic {
                        message: format!("Unknown attribute '{}' for task 'version'", name),
                    });
                }
            }
        }
        Ok(())
    }

    fn invoke(&mut self, properties: &mut PropertyTable) -> TaskResult<()> {
        if !self.initialized {
            return Err(TaskError::ExecutionError {
                task_name: "version".to_string(),
                operation: "invoke".to_string(),
                cause: "Task not initialized".to_string(),
            });
        }

        properties.set(PROPERTY_VERSION_MAJOR, self.major.to_string());
        properties.set(PROPERTY_VERSION_MINOR, self.minor.to_string());
        properties.set(PROPERTY_VERSION_PATCH, self.patch.to_string());
        properties.set(PROPERTY_VERSION, self.version.clone());

        log::debug!(
            "VersionTask: published {}.{}.{} as '{}'",
            self.major,
            self.minor,
            self.patch,
            self.version
        );
        Ok(())
    }
}
