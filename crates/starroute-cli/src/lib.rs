//! Star route CLI library.
//!
//! This crate provides command-line utilities on top of `starroute-lib`:
//! parsing systems given on the command line and formatting route output.

pub mod input;
pub mod output;
