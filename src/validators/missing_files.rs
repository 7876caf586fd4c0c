use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::finding::{FindingSummary, SummaryDirector};

use super::Validator;

/// Files every package must contain, by exact name.
const EXPECTED_FILES: [&str; 3] = ["checksum.md5", "marc.xml", "meta.yml"];

/// Confirms the package contains its fixed manifest of required files.
/// Absence is always a finding, never a fatal condition.
#[derive(Debug)]
pub struct ValidateMissingFiles {
    path: PathBuf,
}

impl ValidateMissingFiles {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Validator for ValidateMissingFiles {
    fn validate(&self) -> Result<FindingSummary> {
        debug!("Looking for missing files in {}", self.path.display());
        let mut director = SummaryDirector::new(self.path.display().to_string());
        for expected in EXPECTED_FILES {
            if !self.path.join(expected).exists() {
                director.add_error(format!("Missing file: {expected}"));
            }
        }
        Ok(director.finish())
    }
}

#[cfg(test)]
#[path = "missing_files_tests.rs"]
mod tests;
