use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// List the immediate subdirectories of a root path, one per package.
/// Sorted so a run visits packages in a stable order.
///
/// # Errors
/// Returns an error if the root directory cannot be read.
pub fn find_packages(root: &Path) -> Result<Vec<PathBuf>> {
    let mut packages = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            packages.push(entry.path());
        }
    }
    packages.sort();
    Ok(packages)
}

/// Recursively collect the names of every file inside a package, stray
/// subdirectories included. Used by the manifest census.
#[must_use]
pub fn walk_file_names(package: &Path) -> Vec<String> {
    WalkDir::new(package)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}

/// Split a file name into stem and extension, keeping the dot on the
/// extension. A name with no dot, or only a leading dot, has an empty
/// extension.
#[must_use]
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(index) if index > 0 => name.split_at(index),
        _ => (name, ""),
    }
}

#[cfg(test)]
#[path = "package_tests.rs"]
mod tests;
