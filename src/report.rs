use std::collections::VecDeque;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::finding::Finding;

pub const DEFAULT_REPORT_WIDTH: usize = 80;

const REPORT_HEADER: &str = "Validation Results";
const NO_ERRORS_BODY: &str = "No validation errors detected.\n";
const BULLET: &str = "* ";

/// Greedily pack whitespace-separated words onto lines of at most `max_len`
/// characters. A single word longer than `max_len` is hard-split into
/// `max_len`-character chunks, each emitted as its own line. The trailing
/// partial line is always flushed, so even an empty message yields one line.
fn split_line_by_words(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut words: VecDeque<&str> = text.split_whitespace().collect();
    let mut lines = Vec::new();
    let mut line = String::new();

    while let Some(word) = words.pop_front() {
        let word_chars: Vec<char> = word.chars().collect();
        if word_chars.len() > max_len {
            for chunk in word_chars.chunks(max_len) {
                lines.push(chunk.iter().collect());
            }
            continue;
        }

        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if candidate.chars().count() > max_len {
            words.push_front(word);
            lines.push(std::mem::take(&mut line));
        } else {
            line = candidate;
        }
    }

    lines.push(line);
    lines
}

/// Render one message as a bullet point wrapped to `width` columns. The first
/// line carries the bullet; continuation lines are indented under it.
#[must_use]
pub fn make_point(message: &str, width: usize) -> Vec<String> {
    let max_len = width.saturating_sub(BULLET.len());
    split_line_by_words(message, max_len)
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                format!("{BULLET}{line}")
            } else {
                format!("{}{line}", " ".repeat(BULLET.len()))
            }
        })
        .collect()
}

/// Renders a flat collection of findings into the fixed-width report block.
pub struct ReportBuilder<'a> {
    findings: &'a [Finding],
}

impl<'a> ReportBuilder<'a> {
    #[must_use]
    pub const fn new(findings: &'a [Finding]) -> Self {
        Self { findings }
    }

    /// Build the report. `width` of zero selects the default 80 columns.
    #[must_use]
    pub fn build_string(&self, width: usize) -> String {
        let width = if width > 0 { width } else { DEFAULT_REPORT_WIDTH };

        let mut sorted: Vec<&Finding> = self.findings.iter().collect();
        // Ties broken by message so the rendering does not depend on the
        // order validators happened to run in.
        sorted.sort_by(|a, b| {
            a.sort_key()
                .cmp(b.sort_key())
                .then_with(|| a.message().cmp(b.message()))
        });

        // Streaming group-by over consecutive equal sources. Correct only
        // because the slice was just sorted by source.
        let mut groups: Vec<(Option<&str>, Vec<&Finding>)> = Vec::new();
        for finding in sorted {
            match groups.last_mut() {
                Some((source, members)) if *source == finding.source() => members.push(finding),
                _ => groups.push((finding.source(), vec![finding])),
            }
        }

        let body = Self::warnings_section(&groups, width);
        let rule = "=".repeat(width);
        format!("{rule}\n{REPORT_HEADER}\n{rule}\n{body}{rule}")
    }

    fn warnings_section(groups: &[(Option<&str>, Vec<&Finding>)], width: usize) -> String {
        if groups.is_empty() {
            return NO_ERRORS_BODY.to_string();
        }

        let blocks: Vec<String> = groups
            .iter()
            .map(|(source, members)| Self::group_message(source.unwrap_or(""), members, width))
            .collect();

        let spacer = format!("\n{}\n", "-".repeat(width));
        blocks.join(&spacer)
    }

    fn group_message(source: &str, members: &[&Finding], width: usize) -> String {
        let mut lines = Vec::new();
        for finding in members {
            lines.extend(make_point(finding.message(), width));
        }
        format!("{source}\n\n{}\n", lines.join("\n"))
    }
}

/// Render findings as report text using the default width when `width` is 0.
#[must_use]
pub fn report_as_string(findings: &[Finding], width: usize) -> String {
    ReportBuilder::new(findings).build_string(width)
}

/// Sink that delivers a finished report string somewhere.
pub trait Reporter {
    /// Deliver the report.
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written.
    fn report(&mut self, report: &str) -> Result<()>;
}

/// Prints the report to a writer, stdout by default.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn with_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, report: &str) -> Result<()> {
        writeln!(self.out, "\n\n{report}")?;
        Ok(())
    }
}

/// Writes the report to a file, replacing any previous contents.
pub struct FileReporter {
    path: PathBuf,
}

impl FileReporter {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Reporter for FileReporter {
    fn report(&mut self, report: &str) -> Result<()> {
        fs::write(&self.path, format!("{report}\n"))?;
        Ok(())
    }
}

/// Emits the report as one info-level log event.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, report: &str) -> Result<()> {
        info!("\n{report}");
        Ok(())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
