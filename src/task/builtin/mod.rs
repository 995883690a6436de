//! Built-in Task Implementations
//!
//! Tasks that ship with the crate. Built-in tasks register themselves with
//! the `builtin!` macro and are discovered automatically.

pub mod api;
pub mod version;
