//! API for builtin task registration and discovery
//!
//! This module provides the dynamic registration system for builtin tasks.
//! Tasks use the `builtin!` macro to register themselves for automatic
//! discovery.

use crate::task::error::TaskResult;
use crate::task::registry::TaskRegistry;
use crate::task::types::DiscoveredTask;
use inventory;

/// Entry for a builtin task in the dynamic registry
pub struct BuiltinTaskEntry {
    pub factory: fn() -> DiscoveredTask,
}

// Collect all builtin task entries
inventory::collect!(BuiltinTaskEntry);

/// Macro for registering builtin tasks
#[macro_export]
macro_rules! builtin {
    ($factory_expr:expr) => {
        inventory::submit!($crate::task::builtin::api::BuiltinTaskEntry {
            factory: $factory_expr
        });
    };
}

/// Get all registered builtin tasks
pub fn discover_builtin_tasks() -> Vec<DiscoveredTask> {
    inventory::iter::<BuiltinTaskEntry>()
        .map(|entry| (entry.factory)())
        .collect()
}

/// Instantiate and register every builtin task
pub fn register_builtin_tasks(registry: &mut TaskRegistry) -> TaskResult<()> {
    for discovered in discover_builtin_tasks() {
        log::debug!("Registering builtin task '{}'", discovered.info.name);
        registry.register_task((discovered.factory)())?;
    }
    Ok(())
}
