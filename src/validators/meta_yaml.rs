use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde_yaml::Value;

use crate::error::{HathicheckError, Result};
use crate::finding::{FindingSummary, SummaryDirector};

use super::Validator;

/// Strict `YYYY-MM-DDTHH:MM[:SS]±HH:MM` timestamp form.
const CAPTURE_DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2})?[+-]\d{2}:\d{2}$";

/// Validates the `meta.yml` metadata file.
///
/// The three facets (capture date, capture agent, page data) accumulate
/// findings independently, except that a missing required key aborts the
/// remaining facet checks for the file.
#[derive(Debug)]
pub struct ValidateMetaYaml {
    yaml_file: PathBuf,
    path: PathBuf,
    require_page_data: bool,
    date_pattern: Regex,
}

impl ValidateMetaYaml {
    #[must_use]
    pub fn new(yaml_file: PathBuf, path: &Path, require_page_data: bool) -> Self {
        Self {
            yaml_file,
            path: path.to_path_buf(),
            require_page_data,
            date_pattern: Regex::new(CAPTURE_DATE_PATTERN).expect("capture date pattern compiles"),
        }
    }

    fn check_metadata(&self, metadata: &Value, director: &mut SummaryDirector) {
        let filename = self.yaml_file.display();

        let Some(capture_date) = metadata.get("capture_date") else {
            director.add_error(format!("{filename} is missing key, 'capture_date'"));
            return;
        };
        self.check_capture_date(capture_date, director);

        let Some(capture_agent) = metadata.get("capture_agent") else {
            director.add_error(format!("{filename} is missing key, 'capture_agent'"));
            return;
        };
        Self::check_capture_agent(capture_agent, director);

        if self.require_page_data {
            let Some(pagedata) = metadata.get("pagedata") else {
                director.add_error(format!("{filename} is missing key, 'pagedata'"));
                return;
            };
            self.check_pagedata(pagedata, director);
        }
    }

    fn check_capture_date(&self, capture_date: &Value, director: &mut SummaryDirector) {
        // Safe YAML parsing yields timestamps as plain strings, so a string
        // matched against the strict pattern is the valid form.
        match capture_date {
            Value::String(text) => {
                if !self.date_pattern.is_match(text) {
                    director.add_error(format!("Invalid YAML capture_date {text}"));
                }
            }
            _ => director.add_error("Invalid YAML data type for in capture_date"),
        }
    }

    fn check_capture_agent(capture_agent: &Value, director: &mut SummaryDirector) {
        if !capture_agent.is_string() {
            director.add_error(format!(
                "Invalid YAML capture_agent: {}",
                display_value(capture_agent)
            ));
        }
    }

    fn check_pagedata(&self, pagedata: &Value, director: &mut SummaryDirector) {
        let Value::Mapping(pages) = pagedata else {
            director.add_error(format!("Invalid YAML pagedata: {}", display_value(pagedata)));
            return;
        };
        for key in pages.keys() {
            let Some(image_name) = key.as_str() else {
                director.add_error(format!("Invalid YAML pagedata: {}", display_value(key)));
                continue;
            };
            if !self.path.join(image_name).exists() {
                director.add_error(format!(
                    "The pagedata {} contains an nonexistent file {image_name}",
                    self.yaml_file.display()
                ));
            }
        }
    }
}

impl Validator for ValidateMetaYaml {
    fn validate(&self) -> Result<FindingSummary> {
        let mut director = SummaryDirector::new(self.yaml_file.display().to_string());

        let contents = match fs::read_to_string(&self.yaml_file) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                director.add_error(format!("Missing {}: {error}", self.yaml_file.display()));
                return Ok(director.finish());
            }
            Err(source) => {
                return Err(HathicheckError::FileRead {
                    path: self.yaml_file.clone(),
                    source,
                })
            }
        };

        match serde_yaml::from_str::<Value>(&contents) {
            Ok(metadata) => self.check_metadata(&metadata, &mut director),
            Err(error) => director.add_error(format!(
                "Unable to read {}. Reason:{error}",
                self.yaml_file.display()
            )),
        }
        Ok(director.finish())
    }
}

/// Human-readable rendering of a YAML scalar for error messages.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "meta_yaml_tests.rs"]
mod tests;
