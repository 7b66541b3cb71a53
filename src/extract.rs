//! Extraction of image references from article text.
//!
//! Only lines consisting entirely of a markdown image tag, once surrounding
//! whitespace is trimmed, are recognized:
//!
//! ```text
//! ![Screenshot](images/shot.png)
//! ```
//!
//! Image tags sharing a line with other text are not picked up. The path is
//! taken from the last `(` on the line with every `(` and `)` removed, so
//! `![a](b(c).png)` yields `c.png`.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::locate::has_article_suffix;
use crate::model::ImageReference;

static IMAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^!\[.*\]\(.*\)$").expect("image line pattern is valid")
});

/// Parses a single line, returning its image reference if the whole trimmed
/// line is a markdown image tag.
///
/// Only ASCII control characters and spaces are trimmed; other Unicode
/// whitespace such as a no-break space is part of the line.
pub fn parse_image_reference_line(line: &str) -> Option<ImageReference> {
    let line = line.trim_matches(|c: char| c <= ' ');
    if !IMAGE_LINE.is_match(line) {
        return None;
    }

    let start = line.rfind('(')?;
    let target: String = line[start..]
        .chars()
        .filter(|&c| c != '(' && c != ')')
        .collect();
    Some(ImageReference::new(target))
}

/// Returns the image references of every matching line of `text`, in order.
///
/// Lines end at `\n`, `\r\n`, or a lone `\r`.
pub fn parse_image_references(text: &str) -> Vec<ImageReference> {
    text.split(['\n', '\r'])
        .filter_map(parse_image_reference_line)
        .collect()
}

/// Reads an article and extracts its image references.
///
/// Never fails: directories, files without the article `extension`, and
/// files that cannot be read as UTF-8 text all yield no references. Read
/// failures are logged as warnings.
pub fn extract_image_references(article: &Path, extension: &str) -> Vec<ImageReference> {
    if article.is_dir() || !has_article_suffix(article, extension) {
        return Vec::new();
    }

    let text = match fs::read_to_string(article) {
        Ok(text) => text,
        Err(err) => {
            warn!(article = %article.display(), error = %err, "could not read article");
            return Vec::new();
        }
    };

    let references = parse_image_references(&text);
    debug!(
        article = %article.display(),
        count = references.len(),
        "extracted image references"
    );
    references
}
