//! `.ymmpx` packaging and unpacking.
//!
//! A package is a zip holding `project.<ext>` (the untouched descriptor),
//! `links.txt` (the manifest) and `resources/<name>` for every bundled file.

pub mod build;
pub mod extract;
pub mod manifest;
pub mod naming;
pub mod types;

pub use build::build_package;
pub use extract::extract_package;
pub use manifest::{LinkMap, Manifest, ManifestEntry};
pub use naming::{allocate_archive_names, unique_child_dir, NameAllocator};
pub use types::{BuildResult, ExtractionResult, PackEvent, MANIFEST_ENTRY, RESOURCE_DIR};

#[cfg(test)]
#[path = "tests/naming_tests.rs"]
mod naming_tests;

#[cfg(test)]
#[path = "tests/manifest_tests.rs"]
mod manifest_tests;

#[cfg(test)]
#[path = "tests/package_tests.rs"]
mod package_tests;
