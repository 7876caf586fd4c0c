use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{HathicheckError, Result};
use crate::finding::{FindingSummary, SummaryDirector};

use super::Validator;

/// Checks that every line of a file strictly decodes as UTF-8.
#[derive(Debug)]
pub struct ValidateUtf8 {
    file_path: PathBuf,
}

impl ValidateUtf8 {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl Validator for ValidateUtf8 {
    fn validate(&self) -> Result<FindingSummary> {
        let mut director = SummaryDirector::new(self.file_path.display().to_string());

        let bytes = match fs::read(&self.file_path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                director.add_error("File missing");
                return Ok(director.finish());
            }
            Err(source) => {
                return Err(HathicheckError::FileRead {
                    path: self.file_path.clone(),
                    source,
                })
            }
        };

        for (index, line) in bytes.split(|&byte| byte == b'\n').enumerate() {
            if let Err(error) = std::str::from_utf8(line) {
                director.add_error(format!(
                    "Line {} contains illegal characters. Details: {error}",
                    index + 1
                ));
            }
        }
        Ok(director.finish())
    }
}

#[cfg(test)]
#[path = "utf8_tests.rs"]
mod tests;
