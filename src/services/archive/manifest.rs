//! `links.txt`: one `sourcePath,archiveRelativePath` pair per line, no escaping.

use crate::services::archive::types::{MANIFEST_ENTRY, RESOURCE_DIR};
use crate::services::fs_utils::path_utils::{join_archive_path, path_key};
use crate::types::errors::{PackError, PackResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub source: String,
    pub archive_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

/// Split a line into (source, archive path).
///
/// Archive paths are `resources/<name>` and names never contain `/`, so the last
/// `,resources/` is the real separator even when the source path has commas.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let marker = format!(",{RESOURCE_DIR}/");
    if let Some(idx) = line.rfind(&marker) {
        return Some((&line[..idx], &line[idx + 1..]));
    }
    line.split_once(',')
}

impl Manifest {
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{},{}\n", e.source, e.archive_path))
            .collect()
    }

    pub fn parse(text: &str) -> Manifest {
        let text = text.trim_start_matches('\u{feff}');
        let mut entries = Vec::new();

        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            match split_line(line) {
                Some((source, archive_path)) => entries.push(ManifestEntry {
                    source: source.trim().to_string(),
                    archive_path: archive_path.trim().to_string(),
                }),
                None => log::warn!("Skipping malformed manifest line: {line}"),
            }
        }

        Manifest { entries }
    }

    pub fn from_bytes(bytes: &[u8]) -> PackResult<Manifest> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| PackError::Format(format!("{MANIFEST_ENTRY} is not valid UTF-8: {e}")))?;
        Ok(Self::parse(text))
    }
}

/// Original source path → extracted absolute location.
#[derive(Debug, Default)]
pub struct LinkMap {
    links: Vec<Link>,
}

#[derive(Debug)]
struct Link {
    source_key: String,
    target: PathBuf,
}

impl LinkMap {
    /// Entries whose target would escape `dest_root` are dropped with a warning.
    pub fn from_manifest(manifest: &Manifest, dest_root: &Path) -> Self {
        let links = manifest
            .entries
            .iter()
            .filter(|e| !e.source.is_empty())
            .filter_map(|entry| match join_archive_path(dest_root, &entry.archive_path) {
                Some(target) => Some(Link {
                    source_key: path_key(&entry.source),
                    target,
                }),
                None => {
                    log::warn!("Ignoring unsafe manifest target: {}", entry.archive_path);
                    None
                }
            })
            .collect();
        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Target for the longest source path contained in `value`, ignoring case and
    /// separator style. Ties go to the earlier manifest line.
    pub fn resolve(&self, value: &str) -> Option<&Path> {
        let haystack = path_key(value);
        let mut best: Option<&Link> = None;
        for link in &self.links {
            if !haystack.contains(&link.source_key) {
                continue;
            }
            if best.map_or(true, |b| link.source_key.len() > b.source_key.len()) {
                best = Some(link);
            }
        }
        best.map(|link| link.target.as_path())
    }
}
