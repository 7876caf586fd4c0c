use std::fmt;

/// Category of a reported problem.
///
/// Only `Error` is produced today; the enum is open so future rule sets can
/// add softer categories without touching the aggregation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FindingKind {
    Error,
}

impl FindingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
        }
    }
}

/// One reported problem: a category, the package or file it applies to, and a
/// human-readable message. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    kind: FindingKind,
    source: Option<String>,
    message: String,
}

impl Finding {
    #[must_use]
    pub fn error(source: Option<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Error,
            source,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FindingKind {
        self.kind
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Key used to order findings in the final report. Findings without a
    /// source sort first, as the empty string.
    #[must_use]
    pub fn sort_key(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(
                f,
                "Finding[{}]{}: \"{}\"",
                self.kind.as_str(),
                source,
                self.message
            ),
            None => write!(f, "Finding[{}]\"{}\"", self.kind.as_str(), self.message),
        }
    }
}

/// Ordered collection of findings that all concern one source.
/// Append order is preserved.
#[derive(Debug, Clone, Default)]
pub struct FindingSummary {
    source: Option<String>,
    findings: Vec<Finding>,
}

impl FindingSummary {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            findings: Vec::new(),
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    #[must_use]
    pub fn contains(&self, finding: &Finding) -> bool {
        self.findings.contains(finding)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.findings.iter()
    }
}

impl IntoIterator for FindingSummary {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}

impl<'a> IntoIterator for &'a FindingSummary {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}

/// Accumulates error messages for one source into a [`FindingSummary`].
///
/// The director starts its summary on construction and `finish` consumes it,
/// so it cannot be used out of sequence or reused for a second summary.
#[derive(Debug)]
pub struct SummaryDirector {
    summary: FindingSummary,
}

impl SummaryDirector {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            summary: FindingSummary::new(source),
        }
    }

    /// Record one error message, stamped with the bound source.
    pub fn add_error(&mut self, message: impl Into<String>) {
        let finding = Finding::error(self.summary.source.clone(), message);
        self.summary.push(finding);
    }

    #[must_use]
    pub fn finish(self) -> FindingSummary {
        self.summary
    }
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
