use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::finding::{FindingSummary, SummaryDirector};
use crate::package::split_extension;
use crate::schema::{Scheme, XmlSchema};

use super::Validator;

/// Validates every OCR XML file in a package against the bundled ALTO schema.
///
/// Candidates are files with a `.xml` extension (case-insensitive) whose stem
/// is not `marc`. Only constructed when OCR checking is enabled.
#[derive(Debug)]
pub struct ValidateOcrFiles {
    path: PathBuf,
}

impl ValidateOcrFiles {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn ocr_file_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let (stem, extension) = split_extension(&name);
            if extension.eq_ignore_ascii_case(".xml") && !stem.eq_ignore_ascii_case("marc") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

impl Validator for ValidateOcrFiles {
    fn validate(&self) -> Result<FindingSummary> {
        let schema = XmlSchema::load(Scheme::Alto)?;
        let mut director = SummaryDirector::new(self.path.display().to_string());

        for name in self.ocr_file_names()? {
            match fs::read_to_string(self.path.join(&name)) {
                Ok(raw_data) => match roxmltree::Document::parse(&raw_data) {
                    Ok(document) => {
                        if schema.validate(&document) {
                            info!("{name} validates to the ALTO XML scheme");
                        } else {
                            director.add_error(format!("{name} does not validate to ALTO scheme"));
                        }
                    }
                    Err(error) => director.add_error(format!("Syntax error: {error}")),
                },
                // Scanned a moment ago but gone now: downgrade to a finding.
                Err(error) if error.kind() == io::ErrorKind::NotFound => {
                    director.add_error("File missing");
                }
                Err(error) => {
                    director.add_error(format!("Unable to read {name}. Reason: {error}"));
                }
            }
        }
        Ok(director.finish())
    }
}

#[cfg(test)]
#[path = "ocr_tests.rs"]
mod tests;
