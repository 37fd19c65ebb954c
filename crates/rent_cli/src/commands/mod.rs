//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod next_due;
pub mod prorate;
pub mod schedule;
