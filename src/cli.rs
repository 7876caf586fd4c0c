use std::path::PathBuf;

use clap::Parser;

use crate::report::DEFAULT_REPORT_WIDTH;

#[derive(Parser, Debug)]
#[command(name = "hathicheck")]
#[command(author, version, about = "Validate digitization packages and report problems")]
#[command(long_about = "Validates each package directory under a root path: required files, \
    numbered component files, checksums, MARC and ALTO XML conformance and YAML metadata.\n\n\
    Exit codes:\n  \
    0 - Run completed; any findings are in the report\n  \
    1 - A fatal condition stopped one or more checks\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Root directory containing the package directories
    pub path: PathBuf,

    /// Also validate OCR xml files against the ALTO schema
    #[arg(long = "check-ocr")]
    pub check_ocr: bool,

    /// Save the validation report to a file
    #[arg(long = "save-report", value_name = "FILE")]
    pub report_name: Option<PathBuf>,

    /// Width of each line in the rendered reports
    #[arg(long, value_name = "COLUMNS", default_value_t = DEFAULT_REPORT_WIDTH)]
    pub report_width: usize,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Write log output to a file instead of stderr
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
