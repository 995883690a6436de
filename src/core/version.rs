//! Build metadata and version accessors shared across the crate.
//! This includes the generated version.rs from the build script into a core
//! module, providing a single source of truth for the stamped constants.

use serde::Serialize;
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the task API version string from the build script into u32.
/// Falls back to a stable default if parsing fails.
pub fn task_api_version() -> u32 {
    TASK_API_VERSION.parse().unwrap_or(20260801)
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Errors from parsing a version display string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("malformed version string '{input}': expected MAJOR.MINOR.PATCH")]
    Malformed { input: String },

    #[error("version component '{component}' in '{input}' is not an unsigned integer")]
    InvalidComponent { component: String, input: String },
}

/// Software version identifiers: the numeric triple plus the display string
/// handed to the build pipeline.
///
/// The display string is carried verbatim. Nothing re-derives it from the
/// numeric fields and nothing checks the two representations against each
/// other, so overrides of either side are honored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub version: String,
}

impl VersionInfo {
    /// Version identifiers stamped into this build by the build script
    pub fn current() -> Self {
        Self {
            major: VERSION_MAJOR,
            minor: VERSION_MINOR,
            patch: VERSION_PATCH,
            version: VERSION.to_string(),
        }
    }

    /// Arbitrary version identifiers, taken as given
    pub fn new(major: u32, minor: u32, patch: u32, version: impl Into<String>) -> Self {
        Self {
            major,
            minor,
            patch,
            version: version.into(),
        }
    }

    /// Strict parse of a `MAJOR.MINOR.PATCH` display string
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let trimmed = input.trim();
        let components: Vec<&str> = trimmed.split('.').collect();
        if components.len() != 3 {
            return Err(VersionError::Malformed {
                input: trimmed.to_string(),
            });
        }

        let mut numbers = [0u32; 3];
        for (slot, component) in numbers.iter_mut().zip(&components) {
            *slot = component
                .parse::<u32>()
                .map_err(|_| VersionError::InvalidComponent {
                    component: component.to_string(),
                    input: trimmed.to_string(),
                })?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2], trimmed))
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.version)
    }
}
