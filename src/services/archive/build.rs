use super::manifest::Manifest;
use super::naming::allocate_archive_names;
use super::types::{project_entry_name, BuildResult, PackEvent, MANIFEST_ENTRY};
use crate::services::config::PackagerSettings;
use crate::services::exclusions::{compute_included, ExcludeItem};
use crate::services::project::{discover_resource_paths, parse_descriptor, partition_existing};
use crate::types::errors::{PackError, PackResult};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Package a project descriptor and every resource it references.
///
/// Steps:
/// 1. Parse the descriptor and collect distinct `FilePath` values
/// 2. Drop paths that are not regular files, then paths marked excluded
/// 3. Allocate unique `resources/<name>` entries
/// 4. Write descriptor, `links.txt` and resources into a staging file next to
///    `output_path`, then move it into place
///
/// `output_path` is final; overwrite policy belongs to the caller. On failure the
/// staging file is discarded and any existing file at `output_path` is untouched.
pub fn build_package(
    descriptor_path: &Path,
    output_path: &Path,
    settings: &PackagerSettings,
    exclusions: &[ExcludeItem],
    mut on_progress: impl FnMut(PackEvent),
) -> PackResult<BuildResult> {
    let descriptor_bytes = fs::read(descriptor_path).map_err(|e| {
        PackError::Io(format!("Failed to read {}: {e}", descriptor_path.display()))
    })?;
    let root = parse_descriptor(&descriptor_bytes).map_err(|e| match e {
        PackError::Parse(msg) => PackError::Parse(format!("{}: {msg}", descriptor_path.display())),
        other => other,
    })?;

    let (existing, skipped_missing) = partition_existing(discover_resource_paths(&root));
    for path in &skipped_missing {
        log::warn!("Skipping missing resource: {path}");
    }

    let included = compute_included(&existing, exclusions);
    let included_set: HashSet<&String> = included.iter().collect();
    let excluded: Vec<String> = existing
        .iter()
        .filter(|p| !included_set.contains(p))
        .cloned()
        .collect();

    let manifest = Manifest {
        entries: allocate_archive_names(&included),
    };

    let parent = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)
        .map_err(|e| PackError::Io(format!("Failed to create {}: {e}", parent.display())))?;

    let mut staging = tempfile::Builder::new()
        .prefix(".ymmpx-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| PackError::Io(format!("Failed to create staging file: {e}")))?;

    let total = manifest.entries.len();
    on_progress(PackEvent::Started { total });

    write_package(
        staging.as_file_mut(),
        &descriptor_bytes,
        &manifest,
        &settings.descriptor_extension,
        |current, name| {
            on_progress(PackEvent::Progress {
                current,
                total,
                name: name.to_string(),
            })
        },
    )?;

    staging
        .as_file()
        .sync_all()
        .map_err(|e| PackError::Io(format!("Failed to flush package: {e}")))?;
    staging.persist(output_path).map_err(|e| {
        PackError::Io(format!(
            "Failed to move package into place at {}: {}",
            output_path.display(),
            e.error
        ))
    })?;

    log::info!(
        "Packaged {} resources into {} ({} missing, {} excluded)",
        total,
        output_path.display(),
        skipped_missing.len(),
        excluded.len()
    );

    let package_path = output_path.to_string_lossy().to_string();
    on_progress(PackEvent::Finished {
        path: package_path.clone(),
    });

    Ok(BuildResult {
        package_path,
        entries: manifest.entries,
        skipped_missing,
        excluded,
    })
}

fn write_package<W: Write + Seek>(
    sink: W,
    descriptor_bytes: &[u8],
    manifest: &Manifest,
    descriptor_extension: &str,
    mut on_entry: impl FnMut(usize, &str),
) -> PackResult<()> {
    let mut zip = ZipWriter::new(sink);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(project_entry_name(descriptor_extension), deflated)?;
    zip.write_all(descriptor_bytes)?;

    zip.start_file(MANIFEST_ENTRY, deflated)?;
    zip.write_all(manifest.to_text().as_bytes())?;

    for (idx, entry) in manifest.entries.iter().enumerate() {
        let mut source = File::open(&entry.source)
            .map_err(|e| PackError::Io(format!("Failed to open {}: {e}", entry.source)))?;
        let size = source.metadata()?.len();

        // Media is already compressed; store it as-is.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .large_file(size >= u64::from(u32::MAX));
        zip.start_file(entry.archive_path.as_str(), options)?;
        io::copy(&mut source, &mut zip)
            .map_err(|e| PackError::Io(format!("Failed to add {}: {e}", entry.source)))?;

        on_entry(idx + 1, &entry.archive_path);
    }

    zip.finish()?;
    Ok(())
}
