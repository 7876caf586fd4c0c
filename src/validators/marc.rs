use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::info;

use crate::error::{HathicheckError, Result};
use crate::finding::{FindingSummary, SummaryDirector};
use crate::schema::{Scheme, XmlSchema};

use super::Validator;

/// Validates `marc.xml` against the bundled MARC21-slim schema.
///
/// At most one finding is ever produced: the first failing condition wins,
/// and schema conformance is only checked once the document parses.
#[derive(Debug)]
pub struct ValidateMarc {
    marc_file: PathBuf,
}

impl ValidateMarc {
    #[must_use]
    pub const fn new(marc_file: PathBuf) -> Self {
        Self { marc_file }
    }
}

impl Validator for ValidateMarc {
    fn validate(&self) -> Result<FindingSummary> {
        info!("Validating {}", self.marc_file.display());
        let schema = XmlSchema::load(Scheme::Marc)?;
        let mut director = SummaryDirector::new(self.marc_file.display().to_string());

        match fs::read_to_string(&self.marc_file) {
            Ok(raw_data) => match roxmltree::Document::parse(&raw_data) {
                Ok(document) => {
                    if !schema.validate(&document) {
                        director.add_error("Unable to validate");
                    }
                }
                Err(error) => director.add_error(format!("Syntax error: {error}")),
            },
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                director.add_error("File missing");
            }
            Err(source) => {
                return Err(HathicheckError::FileRead {
                    path: self.marc_file.clone(),
                    source,
                })
            }
        }
        Ok(director.finish())
    }
}

#[cfg(test)]
#[path = "marc_tests.rs"]
mod tests;
