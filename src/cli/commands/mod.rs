//! CLI command implementations
//!
//! Each driver is implemented in its own module.

pub mod merge;
pub mod push;

pub use merge::{run_merge, MergeOptions};
pub use push::run_push;
