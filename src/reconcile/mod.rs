//! Reconciliation of article image references against the images directory.
//!
//! Three independent passes run in order, and all of them always run:
//! - Missing images: referenced base filenames absent from the images directory
//! - Extra images: image files whose name no reference reduces to
//! - Faulty paths: raw references that do not resolve to a file relative to
//!   the referencing article's directory

mod report;

pub use report::{Discrepancy, DiscrepancyKind, ReconciliationReport};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::model::{Article, ArticleReferenceMap, ImageFile};

/// Reconciles every article's references against `images` and returns all
/// discrepancies found.
///
/// Duplicate references to the same missing image produce one discrepancy
/// per reference.
pub fn reconcile(references: &ArticleReferenceMap, images: &[ImageFile]) -> ReconciliationReport {
    let mut report = ReconciliationReport::new();

    let referenced: Vec<(&Article, &str)> = references
        .iter()
        .flat_map(|(article, refs)| refs.iter().map(move |r| (article, r.base_file_name())))
        .collect();

    report_missing_images(&referenced, images, &mut report);
    report_extra_images(&referenced, images, &mut report);
    report_faulty_paths(references, &mut report);

    report
}

fn report_missing_images(
    referenced: &[(&Article, &str)],
    images: &[ImageFile],
    report: &mut ReconciliationReport,
) {
    let image_names: HashSet<&str> = images.iter().map(|i| i.name()).collect();

    for (article, name) in referenced {
        if !image_names.contains(name) {
            report.add(Discrepancy::missing_image(*name, article.path()));
        }
    }
}

fn report_extra_images(
    referenced: &[(&Article, &str)],
    images: &[ImageFile],
    report: &mut ReconciliationReport,
) {
    let referenced_names: HashSet<&str> = referenced.iter().map(|(_, name)| *name).collect();

    for image in images {
        if !referenced_names.contains(image.name()) {
            report.add(Discrepancy::extra_image(image.name()));
        }
    }
}

fn report_faulty_paths(references: &ArticleReferenceMap, report: &mut ReconciliationReport) {
    for (article, refs) in references.iter() {
        for reference in refs {
            let resolved = resolve_reference(article.parent_dir(), reference.as_str());
            if !resolved.exists() || resolved.is_dir() {
                report.add(Discrepancy::faulty_path(reference.as_str(), article.path()));
            }
        }
    }
}

/// Resolves a raw reference against an article's directory.
///
/// References are always treated as relative, so leading slashes are dropped
/// rather than escaping to the filesystem root. Trailing slashes are dropped
/// too, so `images/a.png/` names the file `images/a.png`. An empty reference
/// resolves to the directory itself.
pub fn resolve_reference(parent: &Path, reference: &str) -> PathBuf {
    parent.join(reference.trim_matches('/'))
}
