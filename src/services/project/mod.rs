pub mod descriptor;
pub mod file_paths;

pub use descriptor::{
    discover_resource_paths, list_resources, parse_descriptor, partition_existing,
    read_descriptor, write_descriptor,
};
pub use file_paths::{find_file_paths, rewrite_file_paths, FILE_PATH_KEY};

#[cfg(test)]
#[path = "tests/file_paths_tests.rs"]
mod file_paths_tests;

#[cfg(test)]
#[path = "tests/descriptor_tests.rs"]
mod descriptor_tests;
