//! Contains functionality used by command line commands.

pub mod analyze;
pub mod config;
pub mod dataset;
pub mod interruption;
pub mod train;
