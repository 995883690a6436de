//! Test modules for the task system
//!
//! Cross-module suites covering lifecycle coordination between registry,
//! runner, and builtin tasks, and host compatibility checking.
