pub mod chart;
mod font;

use crate::{AnalysisError, DocumentAnalyzer};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of the headline metrics of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub file: String,
    pub word_count: usize,
    pub character_count: usize,
    pub sentence_count: usize,
    /// `None` when the document has no words
    pub average_word_length: Option<f64>,
    /// `None` when the document has no sentences
    pub average_sentence_length: Option<f64>,
    pub distinct_words: usize,
    pub most_frequent_words: Vec<String>,
    pub character_fingerprint: BTreeMap<char, usize>,
}

impl DocumentReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Turn an empty-document failure into `None`, keep every other error.
fn unless_empty<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => match err.downcast_ref::<AnalysisError>() {
            Some(AnalysisError::EmptyDocument { .. }) => Ok(None),
            _ => Err(err),
        },
    }
}

impl DocumentAnalyzer {
    /// Collect the document's metrics, listing up to `top_words` frequent words
    #[tracing::instrument(skip(self))]
    pub fn report(&self, top_words: usize) -> Result<DocumentReport> {
        Ok(DocumentReport {
            file: self.path().display().to_string(),
            word_count: self.word_count()?,
            character_count: self.character_count()?,
            sentence_count: self.sentence_count()?,
            average_word_length: unless_empty(self.average_word_length())?,
            average_sentence_length: unless_empty(self.average_sentence_length())?,
            distinct_words: self.num_distinct_words()?,
            most_frequent_words: self.most_frequent_words(top_words)?,
            character_fingerprint: self.character_fingerprint()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_report_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("essay.txt");
        fs::write(&path, "Cats nap. Cats eat!\n").unwrap();

        let report = DocumentAnalyzer::with_defaults(&path).report(1).unwrap();
        assert_eq!(report.word_count, 4);
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.average_sentence_length, Some(2.0));
        assert_eq!(report.most_frequent_words, vec!["cats"]);

        let json = report.to_json().unwrap();
        let parsed: DocumentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
        assert!(json.contains("\"distinct_words\": 3"));
    }

    #[test]
    fn test_report_on_empty_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let report = DocumentAnalyzer::with_defaults(&path).report(5).unwrap();
        assert_eq!(report.word_count, 0);
        assert_eq!(report.average_word_length, None);
        assert_eq!(report.average_sentence_length, None);
        assert!(report.most_frequent_words.is_empty());
    }

    #[test]
    fn test_unless_empty_keeps_other_errors() {
        let empty: Result<f64> = Err(AnalysisError::no_words("average word length").into());
        assert_eq!(unless_empty(empty).unwrap(), None);

        let io: Result<f64> = Err(std::io::Error::other("disk gone").into());
        assert!(unless_empty(io).is_err());

        assert_eq!(unless_empty(Ok(1.5)).unwrap(), Some(1.5));
    }

    #[test]
    fn test_report_missing_file() {
        let dir = tempdir().unwrap();
        let analyzer = DocumentAnalyzer::with_defaults(dir.path().join("missing.txt"));
        assert!(analyzer.report(3).is_err());
    }
}
