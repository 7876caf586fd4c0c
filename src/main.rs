use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use rayon::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hathicheck::cli::Cli;
use hathicheck::finding::Finding;
use hathicheck::manifest::{self, PackageManifest};
use hathicheck::package;
use hathicheck::report::{ConsoleReporter, FileReporter, Reporter, ReportBuilder};
use hathicheck::validators;
use hathicheck::{HathicheckError, EXIT_FATAL, EXIT_SUCCESS, EXIT_USAGE};

fn main() {
    let cli = Cli::parse();

    if let Err(error) = init_logging(&cli) {
        eprintln!("Error: {error}");
        std::process::exit(EXIT_USAGE);
    }

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error}");
            EXIT_USAGE
        }
    };
    std::process::exit(exit_code);
}

fn init_logging(cli: &Cli) -> hathicheck::Result<()> {
    let default_level = if cli.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Everything learned about one package: its file census, the findings of
/// every validator, and any fatal conditions that stopped a check.
struct PackageOutcome {
    manifest: PackageManifest,
    findings: Vec<Finding>,
    fatal_errors: Vec<HathicheckError>,
}

fn run(cli: &Cli) -> hathicheck::Result<i32> {
    let packages = package::find_packages(&cli.path)?;

    // Packages are independent, so they are checked in parallel; collect()
    // keeps discovery order and the report re-sorts findings by source.
    let outcomes: Vec<PackageOutcome> = packages
        .par_iter()
        .map(|pkg| check_package(pkg, cli.check_ocr))
        .collect();

    let mut findings = Vec::new();
    let mut fatal_errors = Vec::new();
    let mut manifest_director = manifest::ManifestDirector::new();
    for outcome in outcomes {
        manifest_director.push(outcome.manifest);
        findings.extend(outcome.findings);
        fatal_errors.extend(outcome.fatal_errors);
    }

    let manifest_report =
        manifest::manifest_as_string(&manifest_director.build(), cli.report_width);
    let validation_report = ReportBuilder::new(&findings).build_string(cli.report_width);

    let mut console = ConsoleReporter::stdout();
    console.report(&manifest_report)?;
    console.report(&validation_report)?;

    if let Some(report_name) = &cli.report_name {
        FileReporter::new(report_name.clone()).report(&validation_report)?;
    }

    if fatal_errors.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        for error in &fatal_errors {
            eprintln!("Error: {error}");
        }
        Ok(EXIT_FATAL)
    }
}

fn check_package(pkg: &Path, check_ocr: bool) -> PackageOutcome {
    info!("Creating a manifest for {}", pkg.display());
    let mut manifest = PackageManifest::new(pkg.display().to_string());
    for file_name in package::walk_file_names(pkg) {
        manifest.add_file(&file_name);
    }

    info!("Checking {}", pkg.display());
    let mut findings = Vec::new();
    let mut fatal_errors = Vec::new();
    match validators::package_validators(pkg, check_ocr) {
        Ok(checks) => {
            for check in checks {
                match validators::run_validation(check.as_ref()) {
                    Ok(found) => {
                        debug!("Check of {} found {} problem(s)", pkg.display(), found.len());
                        findings.extend(found);
                    }
                    // A fatal check stops itself only; the remaining checks
                    // and packages still run.
                    Err(error) => fatal_errors.push(error),
                }
            }
        }
        Err(error) => fatal_errors.push(error),
    }

    PackageOutcome {
        manifest,
        findings,
        fatal_errors,
    }
}
