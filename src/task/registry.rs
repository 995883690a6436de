//! Task Registry
//!
//! Registry of instantiated build tasks, keyed by task name. The host
//! build process owns one registry per build.

use crate::task::error::{TaskError, TaskResult};
use crate::task::traits::BuildTask;
use std::collections::HashMap;

/// Registry for instantiated build tasks
pub struct TaskRegistry {
    /// Map of task name to task instance
    tasks: HashMap<String, Box<dyn BuildTask>>,
}

impl std::fmt::Debug for TaskRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRegistry")
            .field("tasks", &self.tasks.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TaskRegistry {
    /// Create a new empty task registry
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Register a task in the registry
    pub fn register_task(&mut self, task: Box<dyn BuildTask>) -> TaskResult<()> {
        let task_name = task.task_info().name;

        if self.tasks.contains_key(&task_name) {
            return Err(TaskError::Generic {
                message: format!("Task '{}' is already registered", task_name),
            });
        }

        self.tasks.insert(task_name, task);
        Ok(())
    }

    /// Get a task by name
    pub fn get_task(&self, name: &str) -> Option<&dyn BuildTask> {
        self.tasks.get(name).map(|t| t.as_ref())
    }

    /// Get a mutable task by name
    pub fn get_task_mut(&mut self, name: &str) -> Option<&mut Box<dyn BuildTask>> {
        self.tasks.get_mut(name)
    }

    /// Check if a task exists in the registry
    pub fn has_task(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Get list of all task names
    pub fn task_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tasks.keys().cloned().collect();
        names.sort();
        names
    }

    /// Remove a task from the registry
    pub fn unregister_task(&mut self, name: &str) -> TaskResult<()> {
        if self.tasks.remove(name).is_none() {
            return Err(TaskError::TaskNotFound {
                task_name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Total count of registered tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Clear all tasks from registry
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::properties::PropertyTable;
    use crate::task::types::TaskInfo;

    #[derive(Debug)]
    struct StubTask {
        name: String,
    }

    impl StubTask {
        fn boxed(name: &str) -> Box<dyn BuildTask> {
            Box::new(Self {
                name: name.to_string(),
            })
        }
    }

    impl BuildTask for StubTask {
        fn task_info(&self) -> TaskInfo {
            TaskInfo {
                name: self.name.clone(),
                version: "1.0.0".to_string(),
                description: "Stub task".to_string(),
                author: "Test Author".to_string(),
                api_version: 20260101,
            }
        }

        fn initialize(&mut self) -> TaskResult<()> {
            Ok(())
        }

        fn invoke(&mut self, properties: &mut PropertyTable) -> TaskResult<()> {
            properties.set(format!("{}.ran", self.name), "true");
            Ok(())
        }
    }

    #[test]
    fn test_register_and_get_task() {
        let mut registry = TaskRegistry::new();
        registry.register_task(StubTask::boxed("alpha")).unwrap();

        assert!(registry.has_task("alpha"));
        assert_eq!(registry.task_count(), 1);
        let info = registry.get_task("alpha").map(|t| t.task_info());
        assert_eq!(info.map(|i| i.name), Some("alpha".to_string()));
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = TaskRegistry::new();
        registry.register_task(StubTask::boxed("alpha")).unwrap();

        let result = registry.register_task(StubTask::boxed("alpha"));
        match result {
            Err(TaskError::Generic { message }) => {
                assert!(message.contains("already registered"), "{}", message);
            }
            other => panic!("expected Generic error, got {:?}", other),
        }
        assert_eq!(registry.task_count(), 1);
    }

    #[test]
    fn test_get_task_mut_allows_invocation() {
        let mut registry = TaskRegistry::new();
        registry.register_task(StubTask::boxed("alpha")).unwrap();

        let mut properties = PropertyTable::new();
        let task = registry.get_task_mut("alpha").unwrap();
        task.invoke(&mut properties).unwrap();

        assert_eq!(properties.get("alpha.ran"), Some("true"));
    }

    #[test]
    fn test_task_names_are_sorted() {
        let mut registry = TaskRegistry::new();
        registry.register_task(StubTask::boxed("zeta")).unwrap();
        registry.register_task(StubTask::boxed("alpha")).unwrap();
        registry.register_task(StubTask::boxed("mid")).unwrap();

        assert_eq!(
            registry.task_names(),
            vec!["alpha".to_string(), "mid".to_string(), "zeta".to_string()]
        );
    }

    #[test]
    fn test_unregister_task() {
        let mut registry = TaskRegistry::new();
        registry.register_task(StubTask::boxed("alpha")).unwrap();

        registry.unregister_task("alpha").unwrap();
        assert!(!registry.has_task("alpha"));

        let result = registry.unregister_task("alpha");
        assert_eq!(
            result,
            Err(TaskError::TaskNotFound {
                task_name: "alpha".to_string()
            })
        );
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut registry = TaskRegistry::new();
        registry.register_task(StubTask::boxed("alpha")).unwrap();
        registry.register_task(StubTask::boxed("beta")).unwrap();

        registry.clear();
        assert_eq!(registry.task_count(), 0);
        assert!(registry.task_names().is_empty());
    }

    #[test]
    fn test_missing_task_lookup_returns_none() {
        let registry = TaskRegistry::new();
        assert!(registry.get_task("absent").is_none());
        assert!(!registry.has_task("absent"));
    }
}
