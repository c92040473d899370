use super::manifest::{LinkMap, Manifest};
use super::naming::unique_child_dir;
use super::types::{project_entry_name, ExtractionResult, PackEvent, MANIFEST_ENTRY};
use crate::services::config::PackagerSettings;
use crate::services::project::{read_descriptor, rewrite_file_paths, write_descriptor};
use crate::types::errors::{PackError, PackResult};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

/// Unpack a package and point the descriptor's `FilePath` values at the extracted copies.
///
/// Steps:
/// 1. Create a fresh `<root>/<package stem>` (or `_1`, `_2`, ...) directory
/// 2. Extract every entry, preserving its relative path
/// 3. Load `links.txt` and locate the descriptor
/// 4. Rewrite matching `FilePath` values and save the descriptor in place
///
/// On failure after step 1 the partially extracted directory is left for inspection.
pub fn extract_package(
    package_path: &Path,
    destination_root: &Path,
    settings: &PackagerSettings,
    mut on_progress: impl FnMut(PackEvent),
) -> PackResult<ExtractionResult> {
    let file = File::open(package_path).map_err(|e| {
        PackError::Io(format!("Failed to open package {}: {e}", package_path.display()))
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| {
        PackError::Format(format!(
            "Invalid or corrupt package {}: {e}",
            package_path.display()
        ))
    })?;

    let base_name = package_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "project".to_string());
    let root = std::path::absolute(destination_root).map_err(|e| {
        PackError::Io(format!("Invalid destination {}: {e}", destination_root.display()))
    })?;
    let dest_path = unique_child_dir(&root, &base_name);
    fs::create_dir_all(&dest_path).map_err(|e| {
        PackError::Io(format!("Failed to create destination {}: {e}", dest_path.display()))
    })?;
    log::info!(
        "Unpacking {} into {}",
        package_path.display(),
        dest_path.display()
    );

    let total = archive.len();
    on_progress(PackEvent::Started { total });
    let files_extracted = extract_entries(&mut archive, &dest_path, |current, name| {
        on_progress(PackEvent::Progress {
            current,
            total,
            name: name.to_string(),
        })
    })?;

    let manifest_path = dest_path.join(MANIFEST_ENTRY);
    if !manifest_path.is_file() {
        return Err(PackError::Format(format!(
            "{MANIFEST_ENTRY} not found in {}",
            package_path.display()
        )));
    }
    let manifest_bytes = fs::read(&manifest_path)
        .map_err(|e| PackError::Format(format!("Failed to read {MANIFEST_ENTRY}: {e}")))?;
    let manifest = Manifest::from_bytes(&manifest_bytes)?;
    let links = LinkMap::from_manifest(&manifest, &dest_path);

    let project_path = locate_descriptor(&dest_path, &settings.descriptor_extension)?;
    let mut project = read_descriptor(&project_path).map_err(|e| match e {
        PackError::Parse(msg) => PackError::Format(format!("Project is not valid JSON: {msg}")),
        other => other,
    })?;

    let links_rewritten = rewrite_file_paths(&mut project, &links);
    write_descriptor(&project_path, &project)?;

    log::info!(
        "Unpacked {} files, rewrote {} of {} links in {}",
        files_extracted,
        links_rewritten,
        links.len(),
        project_path.display()
    );

    let project_path = project_path.to_string_lossy().to_string();
    on_progress(PackEvent::Finished {
        path: project_path.clone(),
    });

    Ok(ExtractionResult {
        dest_path: dest_path.to_string_lossy().to_string(),
        project_path,
        files_extracted,
        links_rewritten,
    })
}

fn extract_entries(
    archive: &mut ZipArchive<File>,
    dest_path: &Path,
    mut on_entry: impl FnMut(usize, &str),
) -> PackResult<usize> {
    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();

        let entry_path = match entry.enclosed_name() {
            Some(p) => p,
            None => {
                log::warn!("Skipping unsafe package entry: {name}");
                on_entry(i + 1, &name);
                continue;
            }
        };

        let output_path = dest_path.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)
                .map_err(|e| PackError::Io(format!("Failed to create dir: {e}")))?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| PackError::Io(format!("Failed to create parent: {e}")))?;
            }
            let mut outfile = File::create(&output_path).map_err(|e| {
                PackError::Io(format!("Failed to create {}: {e}", output_path.display()))
            })?;
            io::copy(&mut entry, &mut outfile)
                .map_err(|e| PackError::Io(format!("Failed to write {name}: {e}")))?;
            count += 1;
        }

        on_entry(i + 1, &name);
    }
    Ok(count)
}

/// The fixed `project.<ext>` entry, else the first `*.<ext>` file in name order.
fn locate_descriptor(dest_path: &Path, extension: &str) -> PackResult<PathBuf> {
    let fixed = dest_path.join(project_entry_name(extension));
    if fixed.is_file() {
        return Ok(fixed);
    }

    WalkDir::new(dest_path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
        })
        .map(|e| e.into_path())
        .ok_or_else(|| {
            PackError::Format(format!("Project file (.{extension}) not found in package"))
        })
}
