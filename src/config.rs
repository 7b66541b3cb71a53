//! Run configuration for an image check.

use std::path::{Path, PathBuf};

/// Default name of the subdirectory holding articles.
pub const DEFAULT_ARTICLES_DIR: &str = "articles";
/// Default name of the subdirectory holding image assets.
pub const DEFAULT_IMAGES_DIR: &str = "images";
/// Default suffix identifying article files (case-sensitive).
pub const DEFAULT_ARTICLE_EXTENSION: &str = ".markdown";

/// Options for a single check of a documentation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// The documentation root containing the articles and images directories.
    pub doc_dir: PathBuf,
    pub articles_dir_name: String,
    pub images_dir_name: String,
    /// Exact file-name suffix an article must end with.
    pub article_extension: String,
}

impl CheckConfig {
    /// Creates a config for `doc_dir` with the default layout.
    pub fn new(doc_dir: impl Into<PathBuf>) -> Self {
        Self {
            doc_dir: doc_dir.into(),
            articles_dir_name: DEFAULT_ARTICLES_DIR.to_string(),
            images_dir_name: DEFAULT_IMAGES_DIR.to_string(),
            article_extension: DEFAULT_ARTICLE_EXTENSION.to_string(),
        }
    }

    pub fn with_articles_dir_name(mut self, name: impl Into<String>) -> Self {
        self.articles_dir_name = name.into();
        self
    }

    pub fn with_images_dir_name(mut self, name: impl Into<String>) -> Self {
        self.images_dir_name = name.into();
        self
    }

    pub fn with_article_extension(mut self, extension: impl Into<String>) -> Self {
        self.article_extension = extension.into();
        self
    }

    pub fn doc_dir(&self) -> &Path {
        &self.doc_dir
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.doc_dir.join(&self.articles_dir_name)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.doc_dir.join(&self.images_dir_name)
    }
}
