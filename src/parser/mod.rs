pub mod plaintext;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A plain-text document materialized as its ordered lines (paragraphs).
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
}

impl Document {
    /// Read a UTF-8 file, stripping trailing whitespace from every line
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;

        let lines: Vec<String> = content
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();

        tracing::debug!(path = %path.display(), lines = lines.len(), "loaded document");

        Ok(Self {
            path: path.to_path_buf(),
            lines,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// All lines joined by a single space, so words never fuse across paragraphs.
    pub fn joined(&self) -> String {
        self.lines.join(" ")
    }

    /// Characters across all lines, line separators excluded.
    pub fn character_count(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_strips_line_endings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "First line.  \r\nSecond line\n\nFourth\n").unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.lines(), &["First line.", "Second line", "", "Fourth"]);
        assert_eq!(doc.joined(), "First line. Second line  Fourth");
        assert_eq!(doc.path(), path.as_path());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = Document::load(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read document"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_invalid_utf8_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9 au lait\n").unwrap();

        let err = Document::load(&path).unwrap_err();
        let io_err = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_character_count_excludes_separators() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "ab c\nde\n").unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.character_count(), 6);
    }
}
