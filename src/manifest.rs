use std::collections::{BTreeMap, BTreeSet};

use crate::package::split_extension;

/// File-type census for one package: file names bucketed by extension.
/// Set semantics, so repeats of the same name collapse.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    source: String,
    files: BTreeMap<String, BTreeSet<String>>,
}

impl PackageManifest {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            files: BTreeMap::new(),
        }
    }

    /// Bucket one file name under its extension. Names without an extension
    /// collect under the empty-string bucket.
    pub fn add_file(&mut self, file: &str) {
        let base_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let (_, extension) = split_extension(base_name);
        self.files
            .entry(extension.to_string())
            .or_default()
            .insert(file.to_string());
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn files(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.files
    }
}

/// Collects one [`PackageManifest`] per discovered package, in arrival order.
#[derive(Debug, Default)]
pub struct ManifestDirector {
    packages: Vec<PackageManifest>,
}

impl ManifestDirector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a manifest entry for a package and hand it back for filling.
    pub fn add_package(&mut self, source: impl Into<String>) -> &mut PackageManifest {
        self.packages.push(PackageManifest::new(source));
        self.packages
            .last_mut()
            .expect("entry was just pushed")
    }

    pub fn push(&mut self, manifest: PackageManifest) {
        self.packages.push(manifest);
    }

    #[must_use]
    pub fn build(self) -> Vec<PackageManifest> {
        self.packages
    }
}

/// Render the manifest census with the same rule framing as the validation
/// report: packages in arrival order, extensions sorted alphabetically.
#[must_use]
pub fn manifest_as_string(packages: &[PackageManifest], width: usize) -> String {
    let rule = "=".repeat(width);
    let header = format!("{rule}\nManifest\n{rule}");

    let blocks: Vec<String> = packages
        .iter()
        .map(|package| {
            let lines: Vec<String> = package
                .files()
                .iter()
                .map(|(extension, names)| format!(" * {extension}: {} file(s)", names.len()))
                .collect();
            format!("{}\n{}\n", package.source(), lines.join("\n"))
        })
        .collect();

    format!("{header}\n\n{}\n{rule}", blocks.join("\n"))
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
