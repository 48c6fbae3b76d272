//! Command implementations.

pub mod lint;
pub mod output;
pub mod show_common;
