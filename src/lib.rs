//! jyconv: JSON <-> YAML conversion launcher
//!
//! A library for selecting up to ten files and running an external
//! converter process per file, in either direction, with a tally of
//! successful conversions.

pub mod cli;
pub mod config;
pub mod launcher;
pub mod report;
pub mod utils;
