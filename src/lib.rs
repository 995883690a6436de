pub mod core;
pub mod task;
