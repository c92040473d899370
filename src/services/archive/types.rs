use crate::services::archive::manifest::ManifestEntry;
use serde::{Deserialize, Serialize};

/// Fixed manifest entry name inside a package.
pub const MANIFEST_ENTRY: &str = "links.txt";
/// Directory inside a package holding the flattened resources.
pub const RESOURCE_DIR: &str = "resources";
/// Stem of the descriptor entry; the extension comes from settings.
pub const PROJECT_ENTRY_STEM: &str = "project";

pub fn project_entry_name(descriptor_extension: &str) -> String {
    format!("{PROJECT_ENTRY_STEM}.{descriptor_extension}")
}

/// Progress events streamed from a running build or extraction, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "event", content = "data")]
pub enum PackEvent {
    /// Work has started; `total` items will be reported.
    #[serde(rename_all = "camelCase")]
    Started { total: usize },
    /// Item `current` of `total` (1-based) is done.
    #[serde(rename_all = "camelCase")]
    Progress {
        current: usize,
        total: usize,
        name: String,
    },
    #[serde(rename_all = "camelCase")]
    Finished { path: String },
}

/// Result of a packaging run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResult {
    pub package_path: String,
    pub entries: Vec<ManifestEntry>,
    /// Referenced paths that were not regular files at packaging time.
    pub skipped_missing: Vec<String>,
    /// Existing paths left out because they are marked excluded.
    pub excluded: Vec<String>,
}

/// Result of an unpacking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub dest_path: String,
    /// Rewritten descriptor, ready to hand to the host editor.
    pub project_path: String,
    pub files_extracted: usize,
    pub links_rewritten: usize,
}
