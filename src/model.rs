//! Core types shared by the locator, extractor, and reconciler.

use std::path::{Path, PathBuf};

/// A markdown article discovered under the articles directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Article {
    path: PathBuf,
}

impl Article {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory relative image references are resolved against.
    ///
    /// An article path without a parent component resolves against the
    /// current directory.
    pub fn parent_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// The path operand of a standalone markdown image tag, exactly as written.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final `/`-separated segment of the reference.
    pub fn base_file_name(&self) -> &str {
        base_file_name(&self.0)
    }
}

impl From<&str> for ImageReference {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// An asset present in the images directory, identified by its file name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageFile {
    name: String,
}

impl ImageFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Builds an image file from a path, keeping only the final component.
    ///
    /// Returns `None` for paths without a file name (e.g. `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .map(|name| Self::new(name.to_string_lossy()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Articles mapped to the references they contain, in discovery order.
///
/// Built once per run and only read afterwards.
#[derive(Clone, Debug, Default)]
pub struct ArticleReferenceMap {
    entries: Vec<(Article, Vec<ImageReference>)>,
}

impl ArticleReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the references for an article. Re-inserting an article
    /// replaces its previous references in place.
    pub fn insert(&mut self, article: Article, references: Vec<ImageReference>) {
        match self.entries.iter_mut().find(|(a, _)| *a == article) {
            Some((_, existing)) => *existing = references,
            None => self.entries.push((article, references)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Article, &[ImageReference])> {
        self.entries.iter().map(|(a, refs)| (a, refs.as_slice()))
    }

    /// Every reference of every article, flattened without deduplication.
    pub fn all_references(&self) -> impl Iterator<Item = &ImageReference> {
        self.entries.iter().flat_map(|(_, refs)| refs.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Article, Vec<ImageReference>)> for ArticleReferenceMap {
    fn from_iter<I: IntoIterator<Item = (Article, Vec<ImageReference>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (article, refs) in iter {
            map.insert(article, refs);
        }
        map
    }
}

/// Returns the substring after the last `/`, or the whole input if it has none.
pub fn base_file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
