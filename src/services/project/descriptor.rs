use crate::services::exclusions::{self, ExcludeItem};
use crate::services::fs_utils::file_utils::atomic_write;
use crate::services::fs_utils::path_utils::path_key;
use crate::services::project::file_paths::find_file_paths;
use crate::types::errors::{PackError, PackResult};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Parse descriptor bytes, tolerating a leading UTF-8 BOM.
pub fn parse_descriptor(bytes: &[u8]) -> PackResult<Value> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    serde_json::from_slice(body).map_err(|e| PackError::Parse(e.to_string()))
}

pub fn read_descriptor(path: &Path) -> PackResult<Value> {
    let bytes = fs::read(path)
        .map_err(|e| PackError::Io(format!("Failed to read {}: {e}", path.display())))?;
    parse_descriptor(&bytes).map_err(|e| match e {
        PackError::Parse(msg) => PackError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Serialize indented, leaving non-ASCII text unescaped, and replace the file atomically.
pub fn write_descriptor(path: &Path, root: &Value) -> PackResult<()> {
    let json = serde_json::to_string_pretty(root)
        .map_err(|e| PackError::Io(format!("Failed to serialize project: {e}")))?;
    atomic_write(path, json.as_bytes())
        .map_err(|e| PackError::Io(format!("Failed to write {}: {e}", path.display())))
}

/// Distinct `FilePath` values in first-seen order. Spellings of the same path
/// that differ only in case or separator collapse to the first one.
pub fn discover_resource_paths(root: &Value) -> Vec<String> {
    let mut seen = HashSet::new();
    find_file_paths(root)
        .filter(|path| seen.insert(path_key(path)))
        .map(str::to_string)
        .collect()
}

/// Split discovered paths into those that are regular files on disk and those that are not.
pub fn partition_existing(paths: Vec<String>) -> (Vec<String>, Vec<String>) {
    paths.into_iter().partition(|p| Path::new(p).is_file())
}

/// Discovered resources merged with saved exclusion flags, for the review list.
pub fn list_resources(descriptor_path: &Path, saved: &[ExcludeItem]) -> PackResult<Vec<ExcludeItem>> {
    let root = read_descriptor(descriptor_path)?;
    let discovered = discover_resource_paths(&root);
    Ok(exclusions::merge_with_saved(&discovered, saved))
}
