#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A documentation tree on disk with `articles/` and `images/` subdirectories.
pub struct DocTree {
    temp: TempDir,
}

impl DocTree {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(temp.path().join("articles")).expect("create articles dir");
        fs::create_dir_all(temp.path().join("images")).expect("create images dir");
        Self { temp }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.root().join("articles")
    }

    /// Writes an article at `rel` under `articles/`.
    pub fn article(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.articles_dir().join(rel);
        write_file(&path, contents.as_bytes());
        path
    }

    /// Writes an image file into the flat `images/` directory.
    pub fn image(&self, name: &str) -> PathBuf {
        let path = self.root().join("images").join(name);
        write_file(&path, b"\x89PNG");
        path
    }

    /// Writes a file at `rel` relative to the documentation root.
    pub fn file(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        write_file(&path, b"\x89PNG");
        path
    }
}

pub fn write_file(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, contents).expect("write file");
}
