use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use tracing::{debug, info};

use crate::error::{HathicheckError, Result};
use crate::finding::{FindingSummary, SummaryDirector};

use super::Validator;

const MD5_HEX_LEN: usize = 32;
const READ_CHUNK_SIZE: usize = 8192;

/// Verifies every entry of a checksum manifest against the file contents on
/// disk.
///
/// Manifest lines are `<32-hex-digest> [*]<filename>`; digests compare
/// case-insensitively. A referenced file that is missing is an ordinary
/// finding, as is a manifest that is absent altogether. A malformed line is a
/// structural error: it is reported and the rest of that manifest is skipped.
#[derive(Debug)]
pub struct ValidateChecksumReport {
    path: PathBuf,
    report: PathBuf,
}

impl ValidateChecksumReport {
    #[must_use]
    pub fn new(path: &Path, report: PathBuf) -> Self {
        Self {
            path: path.to_path_buf(),
            report,
        }
    }

    fn report_name(&self) -> String {
        self.report
            .file_name()
            .map_or_else(|| self.report.display().to_string(), |n| {
                n.to_string_lossy().into_owned()
            })
    }

    fn check_entries(&self, contents: &str, director: &mut SummaryDirector) {
        let report_name = self.report_name();
        for (index, line) in contents.lines().enumerate() {
            let Some((expected, filename)) = parse_checksum(line) else {
                director.add_error(format!(
                    "Malformed checksum line {} in {report_name}",
                    index + 1
                ));
                // Structural error: the rest of this manifest is untrustworthy.
                return;
            };

            debug!("Calculating the md5 checksum hash for {filename}");
            let file_path = self.path.join(filename);
            match calculate_md5(&file_path) {
                Ok(actual) => {
                    if actual.eq_ignore_ascii_case(expected) {
                        info!("{filename} successfully matches md5 hash in {report_name}");
                    } else {
                        debug!(
                            "Hash mismatch for \"{}\". (Actual ({actual}): expected ({expected}))",
                            file_path.display()
                        );
                        director.add_error(format!(
                            "Checksum listed in {report_name} doesn't match for \"{filename}\""
                        ));
                    }
                }
                Err(error) if error.kind() == io::ErrorKind::NotFound => {
                    info!("Unable to run checksum for missing file, {filename}");
                    director
                        .add_error(format!("Unable to run checksum for missing file, {filename}"));
                }
                Err(error) => {
                    director.add_error(format!(
                        "Unable to run checksum for {filename}. Reason: {error}"
                    ));
                }
            }
        }
    }
}

impl Validator for ValidateChecksumReport {
    fn validate(&self) -> Result<FindingSummary> {
        let mut director = SummaryDirector::new(self.path.display().to_string());
        match fs::read_to_string(&self.report) {
            Ok(contents) => self.check_entries(&contents, &mut director),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                director.add_error("File missing");
            }
            Err(source) => {
                return Err(HathicheckError::FileRead {
                    path: self.report.clone(),
                    source,
                })
            }
        }
        Ok(director.finish())
    }
}

/// Parse one manifest line into `(digest, filename)`. The digest is the first
/// whitespace token and must be exactly 32 hex characters; the filename is
/// the last token, with a leading `*` stripped.
fn parse_checksum(line: &str) -> Option<(&str, &str)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let digest = *tokens.first()?;
    let raw_filename = *tokens.last()?;
    if digest.len() != MD5_HEX_LEN || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let filename = raw_filename.strip_prefix('*').unwrap_or(raw_filename);
    Some((digest, filename))
}

/// Stream a file through MD5 and return the lowercase hex digest.
fn calculate_md5(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut buffer = [0u8; READ_CHUNK_SIZE];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
#[path = "checksum_tests.rs"]
mod tests;
