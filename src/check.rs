//! End-to-end image check of a documentation tree.
//!
//! Structural problems with the tree (missing or empty directories) fail
//! immediately. Reference discrepancies are collected into a
//! [`ReconciliationReport`] and only become an error once every pass has run.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::CheckConfig;
use crate::error::ImgcheckError;
use crate::extract::extract_image_references;
use crate::locate::{list_images, locate_articles};
use crate::model::{Article, ArticleReferenceMap};
use crate::reconcile::{reconcile, ReconciliationReport};

/// Checks the documentation tree described by `config` and returns the
/// reconciliation report.
///
/// Returns an error only for setup failures; a report with discrepancies is
/// still `Ok`.
pub fn check_doc_dir(config: &CheckConfig) -> Result<ReconciliationReport, ImgcheckError> {
    info!(doc_dir = %config.doc_dir().display(), "Start checking image sources");

    ensure_doc_dir(config.doc_dir())?;

    let articles_dir = config.articles_dir();
    if !articles_dir.is_dir() {
        return Err(ImgcheckError::MissingDirectory { path: articles_dir });
    }

    let images_dir = config.images_dir();
    if !images_dir.exists() {
        return Err(ImgcheckError::MissingDirectory { path: images_dir });
    }
    if !images_dir.is_dir() {
        return Err(ImgcheckError::NotADirectory { path: images_dir });
    }

    let articles = locate_articles(&articles_dir, &config.article_extension)?;
    let references = collect_references(articles, &config.article_extension);
    if references.is_empty() {
        warn!(dir = %articles_dir.display(), "no articles found");
    }
    let images = list_images(&images_dir)?;

    let report = reconcile(&references, &images);

    info!(
        articles = references.len(),
        images = images.len(),
        discrepancies = report.error_count(),
        "Finished checking image sources"
    );
    Ok(report)
}

/// Runs the check, writes every discrepancy to stderr as `ERROR - <message>`,
/// and fails with [`ImgcheckError::ValidationFailed`] if there were any.
pub fn check_images(config: &CheckConfig) -> Result<(), ImgcheckError> {
    let report = check_doc_dir(config)?;
    emit_report(report, io::stderr().lock())
}

/// Writes the `ERROR - ` lines to `out` and converts the report into the
/// final result. A failed write is logged and does not replace the
/// validation outcome.
pub fn emit_report<W: Write>(report: ReconciliationReport, out: W) -> Result<(), ImgcheckError> {
    debug!("{}", report);
    if let Err(err) = report.write_errors(out) {
        warn!(error = %err, "could not write image check errors");
    }
    report.into_result()
}

/// Extracts references from each article, one file at a time.
pub fn collect_references(articles: Vec<Article>, extension: &str) -> ArticleReferenceMap {
    articles
        .into_iter()
        .map(|article| {
            let refs = extract_image_references(article.path(), extension);
            (article, refs)
        })
        .collect()
}

fn ensure_doc_dir(doc_dir: &Path) -> Result<(), ImgcheckError> {
    if !doc_dir.exists() {
        return Err(ImgcheckError::MissingDirectory {
            path: doc_dir.to_path_buf(),
        });
    }
    if !doc_dir.is_dir() {
        return Err(ImgcheckError::NotADirectory {
            path: doc_dir.to_path_buf(),
        });
    }

    let mut entries = fs::read_dir(doc_dir).map_err(|source| ImgcheckError::Traverse {
        path: doc_dir.to_path_buf(),
        source,
    })?;
    if entries.next().is_none() {
        return Err(ImgcheckError::EmptyDirectory {
            path: doc_dir.to_path_buf(),
        });
    }

    Ok(())
}
