//! Task runner
//!
//! Drives a registered task through its lifecycle on behalf of the host:
//! compatibility check, initialization, attribute configuration, and
//! invocation against the shared property table.

use crate::core::version::task_api_version;
use crate::task::error::{TaskError, TaskResult};
use crate::task::properties::PropertyTable;
use crate::task::registry::TaskRegistry;
use crate::task::settings::TaskSettings;

/// Helper struct for running tasks through their lifecycle
pub struct TaskRunner {
    /// API version the host build framework offers to tasks
    host_api_version: u32,
}

impl TaskRunner {
    /// Create a runner offering this build's task API version
    pub fn new() -> Self {
        Self {
            host_api_version: task_api_version(),
        }
    }

    /// Create a runner pinned to a specific host API version
    pub fn with_api_version(host_api_version: u32) -> Self {
        Self { host_api_version }
    }

    /// Run a single task: compatibility check, initialize, configure, invoke
    ///
    /// Initialization failures are reported as execution errors for the
    /// `initialize` operation. Configuration and invocation errors already
    /// carry their own context and pass through unchanged.
    pub fn run(
        &self,
        registry: &mut TaskRegistry,
        task_name: &str,
        settings: &TaskSettings,
        properties: &mut PropertyTable,
    ) -> TaskResult<()> {
        let task = registry
            .get_task_mut(task_name)
            .ok_or_else(|| TaskError::TaskNotFound {
                task_name: task_name.to_string(),
            })?;

        if !task.is_compatible(self.host_api_version) {
            return Err(TaskError::VersionIncompatible {
                message: format!(
                    "Task '{}' (API version {}) is not compatible with host API version {}",
                    task_name,
                    task.task_info().api_version,
                    self.host_api_version
                ),
            });
        }

        task.initialize().map_err(|e| TaskError::ExecutionError {
            task_name: task_name.to_string(),
            operation: "initialize".to_string(),
            cause: format!("Failed to initialize task: {}", e),
        })?;

        task.configure(settings)?;

        task.invoke(properties)?;

        log::trace!("TaskRunner: task '{}' completed", task_name);
        Ok(())
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}
