use crate::types::errors::{PackError, PackResult};
use std::path::Path;
use std::process::Command;

pub fn ensure_host_available(host_exe: &Path) -> PackResult<()> {
    if !host_exe.is_file() {
        return Err(PackError::Io(format!(
            "Host executable not found at: {}",
            host_exe.display()
        )));
    }
    Ok(())
}

/// Start the host editor with the project as its only argument. Does not wait.
pub fn launch_host(host_exe: &Path, project_path: &Path) -> PackResult<()> {
    ensure_host_available(host_exe)?;

    Command::new(host_exe)
        .arg(project_path)
        .spawn()
        .map_err(|e| PackError::Io(format!("Failed to launch {}: {e}", host_exe.display())))?;

    log::info!(
        "Launched {} with {}",
        host_exe.display(),
        project_path.display()
    );
    Ok(())
}
