//! Build Task System Module
//!
//! Trait-based build tasks driven by a host build process: registration,
//! compatibility checking, lifecycle execution, and the shared property
//! table tasks publish into.

// Internal modules - all access should go through the api module
pub(crate) mod builtin;
pub(crate) mod error;
pub(crate) mod properties;
pub(crate) mod registry;
pub(crate) mod runner;
pub(crate) mod settings;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the task system
pub mod api;

#[cfg(test)]
mod tests;
