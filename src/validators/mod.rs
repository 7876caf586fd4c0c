mod checksum;
mod components;
mod marc;
mod meta_yaml;
mod missing_files;
mod ocr;
mod subdirs;
mod utf8;

pub use checksum::ValidateChecksumReport;
pub use components::ValidateComponents;
pub use marc::ValidateMarc;
pub use meta_yaml::ValidateMetaYaml;
pub use missing_files::ValidateMissingFiles;
pub use ocr::ValidateOcrFiles;
pub use subdirs::ValidateExtraSubdirectories;
pub use utf8::ValidateUtf8;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::finding::{Finding, FindingSummary};
use crate::package::split_extension;

/// Default stem pattern for numbered component files: exactly eight digits.
pub const COMPONENT_STEM_PATTERN: &str = r"^\d{8}$";

/// Capability implemented by every validation rule.
///
/// Validators hold only their configuration; the findings accumulator is
/// local to `validate`, so a validator may be invoked any number of times
/// with identical results.
pub trait Validator {
    /// Run the check and collect findings for one source.
    ///
    /// # Errors
    /// Returns an error for fatal conditions under which computing findings
    /// is meaningless, such as a package with no component files at all.
    fn validate(&self) -> Result<FindingSummary>;
}

/// Run a single validator and flatten its summary.
///
/// # Errors
/// Propagates the validator's fatal conditions.
pub fn run_validation(validator: &dyn Validator) -> Result<Vec<Finding>> {
    Ok(validator.validate()?.into_iter().collect())
}

/// The full fixed rule set for one package directory.
///
/// The OCR check is only included when enabled; `.xml` joins the required
/// component extensions at the same time.
///
/// # Errors
/// Returns an error if the component stem pattern fails to compile.
pub fn package_validators(
    package: &Path,
    check_ocr: bool,
) -> Result<Vec<Box<dyn Validator + Send + Sync>>> {
    let mut extensions = vec![".txt".to_string(), ".jp2".to_string()];
    if check_ocr {
        extensions.push(".xml".to_string());
    }

    let mut validators: Vec<Box<dyn Validator + Send + Sync>> = vec![
        Box::new(ValidateMissingFiles::new(package)),
        Box::new(ValidateComponents::new(
            package,
            COMPONENT_STEM_PATTERN,
            extensions,
        )?),
        Box::new(ValidateExtraSubdirectories::new(package)),
        Box::new(ValidateChecksumReport::new(
            package,
            package.join("checksum.md5"),
        )),
        Box::new(ValidateMarc::new(package.join("marc.xml"))),
        Box::new(ValidateMetaYaml::new(package.join("meta.yml"), package, true)),
    ];
    if check_ocr {
        validators.push(Box::new(ValidateOcrFiles::new(package)));
    }
    for text_file in text_file_paths(package)? {
        validators.push(Box::new(ValidateUtf8::new(text_file)));
    }
    Ok(validators)
}

/// Paths of the plain-text files in a package, sorted. Each gets its own
/// UTF-8 cleanliness check so findings are keyed to the file.
fn text_file_paths(package: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(package)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let (_, extension) = split_extension(&name);
        if extension.eq_ignore_ascii_case(".txt") {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
