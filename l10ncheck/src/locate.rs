//! Search for a dependency checkout folder near the working directory.

use std::path::{Path, PathBuf};

/// Folder name produced by the dependency manager checkout.
pub const DEPENDENCY_FOLDER: &str = "Carthage";

/// Scans the components of `path` for the dependency folder and returns the
/// path truncated up to and including that component.
pub fn dependency_folder_on_path(path: &Path) -> Option<PathBuf> {
    let mut prefix = PathBuf::new();
    for component in path.components() {
        prefix.push(component);
        if component.as_os_str() == DEPENDENCY_FOLDER {
            return Some(prefix);
        }
    }
    None
}

/// Returns the dependency folder directly under `path`, if it exists.
pub fn dependency_folder_under(path: &Path) -> Option<PathBuf> {
    let candidate = path.join(DEPENDENCY_FOLDER);
    if candidate.is_dir() { Some(candidate) } else { None }
}

/// The first match among the path components, then the subfolder check.
pub fn locate_dependency_folder(cwd: &Path) -> Option<PathBuf> {
    dependency_folder_on_path(cwd).or_else(|| dependency_folder_under(cwd))
}
