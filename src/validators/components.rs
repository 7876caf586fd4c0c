use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::info;

use crate::error::{HathicheckError, Result};
use crate::finding::{FindingSummary, SummaryDirector};
use crate::package::split_extension;

use super::Validator;

/// Checks that every numbered component has a file for every required
/// extension.
///
/// Component stems are discovered by matching file-name stems against the
/// configured pattern. Finding no matching file at all is a fatal condition,
/// distinct from an empty findings list.
#[derive(Debug)]
pub struct ValidateComponents {
    path: PathBuf,
    pattern: Regex,
    extensions: Vec<String>,
}

impl ValidateComponents {
    /// # Errors
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn new(path: &Path, pattern: &str, extensions: Vec<String>) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| HathicheckError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            pattern,
            extensions,
        })
    }

    fn stem_matches(&self, stem: &str) -> bool {
        // Whole-stem match, like a fullmatch; the extension is not part of it.
        self.pattern
            .find(stem)
            .is_some_and(|m| m.start() == 0 && m.end() == stem.len())
    }

    fn discover_stems(&self) -> Result<BTreeSet<String>> {
        let mut stems = BTreeSet::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let (stem, _) = split_extension(&name);
            if self.stem_matches(stem) {
                stems.insert(stem.to_string());
            }
        }
        Ok(stems)
    }
}

impl Validator for ValidateComponents {
    fn validate(&self) -> Result<FindingSummary> {
        let stems = self.discover_stems()?;
        if stems.is_empty() {
            return Err(HathicheckError::NoComponentFiles {
                path: self.path.clone(),
                pattern: self.pattern.as_str().to_string(),
            });
        }

        let mut director = SummaryDirector::new(self.path.display().to_string());
        // BTreeSet iteration gives the sorted stem order the report relies on.
        for stem in &stems {
            for extension in &self.extensions {
                let component_name = format!("{stem}{extension}");
                if !self.path.join(&component_name).exists() {
                    info!("Missing {component_name}");
                    director.add_error(format!("Missing {component_name}"));
                }
            }
        }
        Ok(director.finish())
    }
}

#[cfg(test)]
#[path = "components_tests.rs"]
mod tests;
