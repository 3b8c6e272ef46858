//! Loading and validation of tab-delimited playlist files

pub mod error;
pub mod loader;
