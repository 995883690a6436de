//! Task Trait System
//!
//! Core trait for build-process tasks. A task is registered with the host
//! build framework, initialized once, optionally configured from build-file
//! attributes, and then invoked against the shared property table.
//!
//! Tasks do not own the property table and do not control the surrounding
//! build lifecycle; the host drives them through `TaskRunner`.

use crate::task::error::{TaskError, TaskResult};
use crate::task::properties::PropertyTable;
use crate::task::settings::TaskSettings;
use crate::task::types::TaskInfo;

/// Base trait that all build tasks implement
pub trait BuildTask {
    /// Get task metadata
    fn task_info(&self) -> TaskInfo;

    /// Check if this task is compatible with the given host API version
    ///
    /// The task determines its own compatibility requirements. The default
    /// implementation returns false to force tasks to explicitly implement
    /// their compatibility logic.
    ///
    /// Builtin tasks should use `crate::core::version::task_api_version()`
    /// as their minimum required version.
    fn is_compatible(&self, _host_api_version: u32) -> bool {
        false
    }

    /// Initialize the task
    ///
    /// Runs exactly once, before any attribute override and before `invoke`.
    fn initialize(&mut self) -> TaskResult<()>;

    /// Apply build-file attribute overrides
    ///
    /// Runs after `initialize`. The default implementation accepts empty
    /// settings and rejects every attribute as unknown.
    fn configure(&mut self, settings: &TaskSettings) -> TaskResult<()> {
        match settings.attribute_names().first() {
            None => Ok(()),
            Some(name) => Err(TaskError::Generic {
                message: format!(
                    "Unknown attribute '{}' for task '{}'",
                    name,
                    self.task_info().name
                ),
            }),
        }
    }

    /// Invoke the task against the shared property table
    fn invoke(&mut self, properties: &mut PropertyTable) -> TaskResult<()>;
}
