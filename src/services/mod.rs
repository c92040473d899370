pub mod archive;
pub mod config;
pub mod core;
pub mod exclusions;
pub mod fs_utils;
pub mod host;
pub mod project;
