//! Type definitions for the task system
//!
//! Core data structures for task metadata and builtin task discovery.

use crate::task::traits::BuildTask;

/// Task metadata information
#[derive(Debug, Clone, PartialEq)]
pub struct TaskInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub api_version: u32,
}

/// Discovery result with task metadata and the instantiation factory
#[derive(Debug, Clone)]
pub struct DiscoveredTask {
    pub info: TaskInfo,
    pub factory: fn() -> Box<dyn BuildTask>,
}
