pub mod models;

pub use models::*;

use crate::services::fs_utils::file_utils::atomic_write;
use crate::types::errors::{PackError, PackResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Folder under the host's plugin directory that holds this tool's data.
pub const PLUGIN_FOLDER_NAME: &str = "YMMResourcePackager";
pub const EXCLUSION_FILE_NAME: &str = "exclude.json";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub struct ConfigService {
    plugin_dir: PathBuf,
    settings: Mutex<PackagerSettings>,
}

impl ConfigService {
    /// Build from an already-resolved plugin directory (`<host>/user/plugin`).
    /// Loads `settings.json` from the data dir, falling back to defaults.
    pub fn new(plugin_dir: PathBuf) -> Self {
        let settings_path = plugin_dir.join(PLUGIN_FOLDER_NAME).join(SETTINGS_FILE_NAME);
        let settings = Self::load_from_file(&settings_path);

        Self {
            plugin_dir,
            settings: Mutex::new(settings),
        }
    }

    fn load_from_file(path: &Path) -> PackagerSettings {
        if !path.exists() {
            return PackagerSettings::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read settings {}: {e}", path.display());
                return PackagerSettings::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Malformed settings {}, using defaults: {e}", path.display());
                PackagerSettings::default()
            }
        }
    }

    pub fn plugin_dir(&self) -> &Path {
        &self.plugin_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.plugin_dir.join(PLUGIN_FOLDER_NAME)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join(SETTINGS_FILE_NAME)
    }

    pub fn exclusion_file(&self) -> PathBuf {
        self.data_dir().join(EXCLUSION_FILE_NAME)
    }

    pub fn extraction_root(&self) -> PathBuf {
        self.get_settings()
            .extraction_root
            .unwrap_or_else(|| self.data_dir())
    }

    /// The plugin dir sits at `<host>/user/plugin`; the editor lives in `<host>`.
    pub fn host_executable(&self) -> PathBuf {
        let host_root = self.plugin_dir.ancestors().nth(2).unwrap_or(&self.plugin_dir);
        host_root.join(self.get_settings().host_executable)
    }

    /// `<dir>/<stem>.<package_extension>` next to the descriptor.
    pub fn default_package_path(&self, descriptor_path: &Path) -> PathBuf {
        let extension = self.get_settings().package_extension;
        descriptor_path.with_extension(extension)
    }

    /// First of `<stem>.ext`, `<stem>_1.ext`, `<stem>_2.ext`, ... that does not exist yet.
    pub fn next_free_package_path(&self, descriptor_path: &Path) -> PathBuf {
        let candidate = self.default_package_path(descriptor_path);
        if !candidate.exists() {
            return candidate;
        }

        let extension = self.get_settings().package_extension;
        let stem = descriptor_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string());

        let mut counter = 1;
        loop {
            let numbered = candidate.with_file_name(format!("{stem}_{counter}.{extension}"));
            if !numbered.exists() {
                return numbered;
            }
            counter += 1;
        }
    }

    pub fn get_settings(&self) -> PackagerSettings {
        self.settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn save_settings(&self, new_settings: PackagerSettings) -> PackResult<()> {
        let path = self.settings_file();
        let json = serde_json::to_string_pretty(&new_settings)
            .map_err(|e| PackError::Io(format!("Failed to serialize settings: {e}")))?;
        atomic_write(&path, json.as_bytes())
            .map_err(|e| PackError::Io(format!("Failed to write {}: {e}", path.display())))?;

        *self
            .settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = new_settings;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
