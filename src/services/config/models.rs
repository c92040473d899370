use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PackagerSettings {
    /// Extension of the project descriptor, without the dot.
    pub descriptor_extension: String,
    /// Extension of the packaged archive, without the dot.
    pub package_extension: String,
    /// Host editor executable, relative to the host install root.
    pub host_executable: String,
    /// Where unpacked projects go. Defaults to the plugin data directory.
    pub extraction_root: Option<PathBuf>,
}

impl Default for PackagerSettings {
    fn default() -> Self {
        Self {
            descriptor_extension: "ymmp".into(),
            package_extension: "ymmpx".into(),
            host_executable: "YukkuriMovieMaker.exe".into(),
            extraction_root: None,
        }
    }
}
