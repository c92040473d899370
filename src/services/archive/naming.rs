//! Collision-free flat naming inside the package namespace.
//!
//! `clip.mp4`, `clip.mp4`, `clip.mp4` → `clip.mp4`, `clip_1.mp4`, `clip_2.mp4`.
//! Deterministic for a given input order; a different order can shift the suffixes.

use crate::services::archive::manifest::ManifestEntry;
use crate::services::archive::types::RESOURCE_DIR;
use crate::services::fs_utils::path_utils::file_name_of;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const FALLBACK_NAME: &str = "resource";

/// `("clip", ".mp4")`; a leading dot does not start an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

#[derive(Debug, Default)]
pub struct NameAllocator {
    used: HashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `file_name`, or the first free `<stem>_<n><ext>` variant. Case-insensitive.
    pub fn allocate(&mut self, file_name: &str) -> String {
        let name = if file_name.is_empty() {
            FALLBACK_NAME
        } else {
            file_name
        };

        if self.used.insert(name.to_lowercase()) {
            return name.to_string();
        }

        let (stem, ext) = split_extension(name);
        let mut counter = 1;
        loop {
            let candidate = format!("{stem}_{counter}{ext}");
            if self.used.insert(candidate.to_lowercase()) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Assign every source path a unique `resources/<name>` entry, in input order.
pub fn allocate_archive_names(sources: &[String]) -> Vec<ManifestEntry> {
    let mut allocator = NameAllocator::new();
    sources
        .iter()
        .map(|source| {
            let unique = allocator.allocate(file_name_of(source));
            ManifestEntry {
                source: source.clone(),
                archive_path: format!("{RESOURCE_DIR}/{unique}"),
            }
        })
        .collect()
}

/// First of `<root>/<base>`, `<root>/<base>_1`, ... that does not exist yet.
pub fn unique_child_dir(root: &Path, base_name: &str) -> PathBuf {
    let natural = root.join(base_name);
    if !natural.exists() {
        return natural;
    }

    let mut counter = 1;
    loop {
        let candidate = root.join(format!("{base_name}_{counter}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
