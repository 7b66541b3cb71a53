//! Discovery of articles and image assets on disk.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::ImgcheckError;
use crate::model::{Article, ImageFile};

/// Collects every file under `articles_dir` whose name ends with `extension`.
///
/// The walk is breadth-first: all entries of a directory are visited before
/// any of its subdirectories are expanded. Entries within one directory are
/// taken in file-name order so results are stable across platforms.
///
/// Symbolic links are followed and there is no cycle detection, so the
/// articles directory is expected to be a tree.
pub fn locate_articles(articles_dir: &Path, extension: &str) -> Result<Vec<Article>, ImgcheckError> {
    if !articles_dir.is_dir() {
        return Err(ImgcheckError::MissingDirectory {
            path: articles_dir.to_path_buf(),
        });
    }

    let mut queue: VecDeque<PathBuf> = sorted_children(articles_dir)?.into();
    let mut articles = Vec::new();

    while let Some(path) = queue.pop_front() {
        if path.is_dir() {
            queue.extend(sorted_children(&path)?);
        } else if has_article_suffix(&path, extension) {
            articles.push(Article::new(path));
        }
    }

    debug!(
        count = articles.len(),
        dir = %articles_dir.display(),
        "located articles"
    );
    Ok(articles)
}

/// Lists the direct entries of `images_dir` by file name, without recursion.
///
/// Subdirectories are listed like any other entry.
pub fn list_images(images_dir: &Path) -> Result<Vec<ImageFile>, ImgcheckError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(images_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ImgcheckError::Traverse {
            path: images_dir.to_path_buf(),
            source: source.into(),
        })?;

        if let Some(image) = ImageFile::from_path(entry.path()) {
            images.push(image);
        }
    }

    debug!(
        count = images.len(),
        dir = %images_dir.display(),
        "listed images"
    );
    Ok(images)
}

pub(crate) fn has_article_suffix(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(extension))
        .unwrap_or(false)
}

fn sorted_children(dir: &Path) -> Result<Vec<PathBuf>, ImgcheckError> {
    let traverse_err = |source| ImgcheckError::Traverse {
        path: dir.to_path_buf(),
        source,
    };

    let mut children = fs::read_dir(dir)
        .map_err(traverse_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(traverse_err)?;
    children.sort();
    Ok(children)
}
