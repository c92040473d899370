use std::path::{Component, Path, PathBuf};

/// Validates that the `target_path` strictly resolves _inside_ the `base_path`.
/// Rejects path traversal attempts using `..` or absolute paths aiming outside the allowed directory.
pub fn is_path_safe(base_path: &Path, target_path: &Path) -> bool {
    if target_path.is_absolute() {
        return target_path.starts_with(base_path);
    }

    let mut depth = 0;
    for component in target_path.components() {
        match component {
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            Component::Normal(_) => {
                depth += 1;
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }

    true
}

/// Key for comparing resource paths the way Windows does: case-insensitive,
/// `/` and `\` equivalent.
pub fn path_key(path: &str) -> String {
    path.replace('\\', "/").to_lowercase()
}

/// Join a `/`-separated archive-relative path onto `base_path` using native separators.
///
/// Returns `None` when the relative path would escape `base_path`.
pub fn join_archive_path(base_path: &Path, relative: &str) -> Option<PathBuf> {
    let native: PathBuf = relative
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect();

    if native.as_os_str().is_empty() || !is_path_safe(base_path, &native) {
        return None;
    }

    Some(base_path.join(native))
}

/// Last segment of a path string, splitting on both `/` and `\`.
///
/// Descriptor paths are recorded by the host editor on Windows, so the split
/// must not depend on the separator of the platform doing the packaging.
pub fn file_name_of(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
