//! Command-line interface for strcalc
//!
//! This crate provides the `strcalc` binary. The library portion holds the
//! pieces worth testing without spawning a process: escape handling for
//! shell-supplied input and the JSON result format.

pub mod escapes;
pub mod report;
