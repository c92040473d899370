//! Shell association of the package extension with the unpacker.
//!
//! Windows only: writes `HKEY_CLASSES_ROOT` keys through `reg.exe`, which needs
//! an elevated process.

use crate::types::errors::{PackError, PackResult};
use std::path::Path;
use std::process::Command;

pub const PROG_ID: &str = "YMMResourcePackagerFile";
pub const PROG_DESCRIPTION: &str = "YMM Resource Packager File";

fn reg_add(key: &str, value: &str) -> Vec<String> {
    ["add", key, "/ve", "/d", value, "/f"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Argument lists for `reg.exe`, in the order they must run.
pub fn association_commands(unpacker_exe: &Path, package_extension: &str) -> Vec<Vec<String>> {
    let ext_key = format!(r"HKCR\.{package_extension}");
    let prog_key = format!(r"HKCR\{PROG_ID}");
    let command_key = format!(r"{prog_key}\shell\open\command");
    let open_command = format!("\"{}\" \"%1\"", unpacker_exe.display());

    vec![
        reg_add(&ext_key, PROG_ID),
        reg_add(&prog_key, PROG_DESCRIPTION),
        reg_add(&command_key, &open_command),
    ]
}

pub fn register_association(unpacker_exe: &Path, package_extension: &str) -> PackResult<()> {
    if !cfg!(windows) {
        return Err(PackError::Io(
            "File association is only supported on Windows".to_string(),
        ));
    }

    for args in association_commands(unpacker_exe, package_extension) {
        let status = Command::new("reg")
            .args(&args)
            .status()
            .map_err(|e| PackError::Io(format!("Failed to run reg.exe: {e}")))?;
        if !status.success() {
            return Err(PackError::Io(format!(
                "reg add {} failed ({status}); run as administrator",
                args[1]
            )));
        }
    }

    log::info!(".{package_extension} associated with {}", unpacker_exe.display());
    Ok(())
}
