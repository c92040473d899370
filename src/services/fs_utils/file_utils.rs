use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write a file atomically: stage into a temp file beside `path`, then rename over it.
/// Readers never observe a half-written file. On failure the staged file is removed
/// and an existing `path` is left as it was.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(content)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
