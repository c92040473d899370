//! User-reviewed exclusion list for packaging.
//!
//! Persisted as a JSON array of `{ "FilePath": ..., "IsExcluded": ... }` under the
//! plugin data directory. Paths compare case-insensitively with `/` and `\`
//! treated alike; unseen paths are not excluded.

use crate::services::fs_utils::file_utils::atomic_write;
use crate::services::fs_utils::path_utils::path_key;
use crate::types::errors::{PackError, PackResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ExcludeItem {
    pub file_path: String,
    #[serde(default)]
    pub is_excluded: bool,
}

impl ExcludeItem {
    pub fn new(file_path: impl Into<String>, is_excluded: bool) -> Self {
        Self {
            file_path: file_path.into(),
            is_excluded,
        }
    }
}

/// Case-insensitive lookup of saved flags. The last entry wins on duplicates.
fn saved_flags(saved: &[ExcludeItem]) -> HashMap<String, bool> {
    saved
        .iter()
        .map(|item| (path_key(&item.file_path), item.is_excluded))
        .collect()
}

/// Discovered paths minus those flagged excluded, order preserved.
pub fn compute_included(discovered: &[String], saved: &[ExcludeItem]) -> Vec<String> {
    let flags = saved_flags(saved);
    discovered
        .iter()
        .filter(|path| {
            let excluded = flags.get(&path_key(path)).copied().unwrap_or(false);
            if excluded {
                log::info!("Excluded from package: {path}");
            }
            !excluded
        })
        .cloned()
        .collect()
}

/// One editable row per discovered path, flag taken from the saved list.
pub fn merge_with_saved(discovered: &[String], saved: &[ExcludeItem]) -> Vec<ExcludeItem> {
    let flags = saved_flags(saved);
    discovered
        .iter()
        .map(|path| {
            let excluded = flags.get(&path_key(path)).copied().unwrap_or(false);
            ExcludeItem::new(path.clone(), excluded)
        })
        .collect()
}

/// "Select all" / "Deselect all" from the review list.
pub fn set_all_excluded(items: &mut [ExcludeItem], excluded: bool) {
    for item in items {
        item.is_excluded = excluded;
    }
}

/// Reviewed rows verbatim, followed by saved entries the review did not cover.
pub fn merge_reviewed(reviewed: &[ExcludeItem], saved: &[ExcludeItem]) -> Vec<ExcludeItem> {
    let covered: HashSet<String> = reviewed.iter().map(|i| path_key(&i.file_path)).collect();

    let mut merged = reviewed.to_vec();
    merged.extend(
        saved
            .iter()
            .filter(|item| !covered.contains(&path_key(&item.file_path)))
            .cloned(),
    );
    merged
}

pub struct ExclusionStore {
    path: PathBuf,
}

impl ExclusionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty list.
    pub fn load(&self) -> PackResult<Vec<ExcludeItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| PackError::Io(format!("Failed to read {}: {e}", self.path.display())))?;
        let content = content.trim_start_matches('\u{feff}');
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(content).map_err(|e| {
            PackError::Parse(format!("Failed to parse {}: {e}", self.path.display()))
        })
    }

    pub fn save(&self, items: &[ExcludeItem]) -> PackResult<()> {
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| PackError::Io(format!("Failed to serialize exclusions: {e}")))?;
        atomic_write(&self.path, json.as_bytes())
            .map_err(|e| PackError::Io(format!("Failed to write {}: {e}", self.path.display())))?;
        log::info!("Saved {} exclusion entries to {}", items.len(), self.path.display());
        Ok(())
    }

    /// Persist a finished review session, retaining entries for paths it did not list.
    pub fn save_reviewed(&self, reviewed: &[ExcludeItem]) -> PackResult<()> {
        let saved = self.load()?;
        self.save(&merge_reviewed(reviewed, &saved))
    }
}

#[cfg(test)]
#[path = "tests/exclusions_tests.rs"]
mod tests;
