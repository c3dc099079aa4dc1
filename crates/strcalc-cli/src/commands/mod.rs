//! Command implementations
//!
//! Each command returns `Ok(true)` when every calculation succeeded,
//! `Ok(false)` when at least one input was rejected, and `Err` when the
//! command itself could not run.

pub mod add;
pub mod batch;
