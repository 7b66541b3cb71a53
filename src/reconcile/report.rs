//! Reconciliation report types for structured discrepancy reporting.
//!
//! A report is collected in full before anything is emitted, so callers see
//! every discrepancy from every pass rather than the first one found.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::error::ImgcheckError;

/// The result of reconciling article references against image assets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationReport {
    /// All discrepancies found, in pass order.
    pub discrepancies: Vec<Discrepancy>,
}

impl ReconciliationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            discrepancies: Vec::new(),
        }
    }

    /// Adds a discrepancy to the report.
    pub fn add(&mut self, discrepancy: Discrepancy) {
        self.discrepancies.push(discrepancy);
    }

    /// Returns the total number of discrepancies.
    pub fn error_count(&self) -> usize {
        self.discrepancies.len()
    }

    /// Returns the number of discrepancies of one kind.
    pub fn count(&self, kind: DiscrepancyKind) -> usize {
        self.discrepancies.iter().filter(|d| d.kind == kind).count()
    }

    /// Returns true if no discrepancies were found.
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// The human-readable message of every discrepancy, in order.
    pub fn messages(&self) -> Vec<String> {
        self.discrepancies.iter().map(ToString::to_string).collect()
    }

    /// Writes one `ERROR - <message>` line per discrepancy.
    pub fn write_errors<W: Write>(&self, mut out: W) -> io::Result<()> {
        for discrepancy in &self.discrepancies {
            writeln!(out, "ERROR - {}", discrepancy)?;
        }
        Ok(())
    }

    /// Converts a non-empty report into [`ImgcheckError::ValidationFailed`].
    pub fn into_result(self) -> Result<(), ImgcheckError> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(ImgcheckError::ValidationFailed { report: self })
        }
    }
}

impl fmt::Display for ReconciliationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.discrepancies.is_empty() {
            return writeln!(f, "Image check passed: no discrepancies found");
        }

        writeln!(
            f,
            "Image check found {} missing image(s), {} extra image(s), and {} faulty image path(s):",
            self.count(DiscrepancyKind::MissingImage),
            self.count(DiscrepancyKind::ExtraImage),
            self.count(DiscrepancyKind::FaultyImagePath)
        )?;
        writeln!(f)?;

        for discrepancy in &self.discrepancies {
            writeln!(f, "  {}", discrepancy)?;
        }

        Ok(())
    }
}

/// A single mismatch between articles and image assets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub kind: DiscrepancyKind,

    /// The image name or raw reference the discrepancy is about.
    pub subject: String,

    /// The article containing the reference, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<PathBuf>,
}

impl Discrepancy {
    /// A referenced base filename with no matching file in the images directory.
    pub fn missing_image(name: impl Into<String>, article: impl Into<PathBuf>) -> Self {
        Self {
            kind: DiscrepancyKind::MissingImage,
            subject: name.into(),
            article: Some(article.into()),
        }
    }

    /// An image file no article references.
    pub fn extra_image(name: impl Into<String>) -> Self {
        Self {
            kind: DiscrepancyKind::ExtraImage,
            subject: name.into(),
            article: None,
        }
    }

    /// A raw reference that does not resolve to a file next to its article.
    pub fn faulty_path(reference: impl Into<String>, article: impl Into<PathBuf>) -> Self {
        Self {
            kind: DiscrepancyKind::FaultyImagePath,
            subject: reference.into(),
            article: Some(article.into()),
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            DiscrepancyKind::MissingImage => "Missing image",
            DiscrepancyKind::ExtraImage => "Extra image",
            DiscrepancyKind::FaultyImagePath => "Faulty image path",
        };
        write!(f, "{}: {}", label, self.subject)
    }
}

/// A stable code identifying the reconciliation pass that produced a discrepancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// An article references an image name absent from the images directory.
    MissingImage,
    /// The images directory holds a file nothing references.
    ExtraImage,
    /// A reference does not resolve relative to its article's directory.
    FaultyImagePath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_error_lines() {
        assert_eq!(
            Discrepancy::missing_image("a.png", "x.markdown").to_string(),
            "Missing image: a.png"
        );
        assert_eq!(Discrepancy::extra_image("b.png").to_string(), "Extra image: b.png");
        assert_eq!(
            Discrepancy::faulty_path("images/c.png", "x.markdown").to_string(),
            "Faulty image path: images/c.png"
        );
    }

    #[test]
    fn write_errors_prefixes_each_line() {
        let mut report = ReconciliationReport::new();
        report.add(Discrepancy::missing_image("a.png", "x.markdown"));
        report.add(Discrepancy::extra_image("b.png"));

        let mut out = Vec::new();
        report.write_errors(&mut out).expect("write to vec");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "ERROR - Missing image: a.png\nERROR - Extra image: b.png\n"
        );
    }

    #[test]
    fn into_result_fails_only_when_dirty() {
        assert!(ReconciliationReport::new().into_result().is_ok());

        let mut report = ReconciliationReport::new();
        report.add(Discrepancy::extra_image("b.png"));
        let err = report.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing images, extra images, or faulty image paths"
        );
        match err {
            ImgcheckError::ValidationFailed { report } => assert_eq!(report.error_count(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn display_summarizes_counts_per_kind() {
        assert_eq!(
            ReconciliationReport::new().to_string(),
            "Image check passed: no discrepancies found\n"
        );

        let mut report = ReconciliationReport::new();
        report.add(Discrepancy::missing_image("a.png", "x.markdown"));
        report.add(Discrepancy::missing_image("a.png", "y.markdown"));
        report.add(Discrepancy::faulty_path("a.png", "x.markdown"));

        let text = report.to_string();
        assert!(text.starts_with(
            "Image check found 2 missing image(s), 0 extra image(s), and 1 faulty image path(s):\n"
        ));
        assert!(text.contains("  Faulty image path: a.png\n"));
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let json = serde_json::to_value(Discrepancy::extra_image("b.png")).expect("serialize");
        assert_eq!(json["kind"], "extra_image");
        assert_eq!(json["subject"], "b.png");
        assert!(json.get("article").is_none());
    }
}
