//! Public API for the task system
//!
//! This module provides the complete public API for the task system.
//! Host integrations should import from here rather than directly from
//! internal modules.

// Error handling
pub use crate::task::error::{TaskError, TaskResult};

// Task metadata and discovery types
pub use crate::task::types::{DiscoveredTask, TaskInfo};

// Task trait and lifecycle driver
pub use crate::task::runner::TaskRunner;
pub use crate::task::traits::BuildTask;

// Shared state handed to tasks by the host
pub use crate::task::properties::PropertyTable;
pub use crate::task::settings::TaskSettings;

// Task registry and builtin discovery
pub use crate::task::builtin::api::{discover_builtin_tasks, register_builtin_tasks};
pub use crate::task::registry::TaskRegistry;

// Builtin tasks
pub use crate::task::builtin::version::{
    VersionTask, PROPERTY_VERSION, PROPERTY_VERSION_MAJOR, PROPERTY_VERSION_MINOR,
    PROPERTY_VERSION_PATCH,
};
