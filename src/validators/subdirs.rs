use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::finding::{FindingSummary, SummaryDirector};

use super::Validator;

/// Flags every direct subdirectory of the package: packages are flat.
#[derive(Debug)]
pub struct ValidateExtraSubdirectories {
    path: PathBuf,
}

impl ValidateExtraSubdirectories {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Validator for ValidateExtraSubdirectories {
    fn validate(&self) -> Result<FindingSummary> {
        debug!("Looking for extra subdirectories in {}", self.path.display());
        let mut director = SummaryDirector::new(self.path.display().to_string());
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        for name in names {
            director.add_error(format!("Extra subdirectory {name}"));
        }
        Ok(director.finish())
    }
}

#[cfg(test)]
#[path = "subdirs_tests.rs"]
mod tests;
