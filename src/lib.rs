pub mod analyzer;
pub mod checker;
pub mod config;
pub mod error;
pub mod parser;
pub mod report;

pub use analyzer::DocumentAnalyzer;
pub use config::Config;
pub use error::AnalysisError;
pub use report::DocumentReport;

use serde::Serialize;

/// Every element tying for the longest (or shortest) length, with that length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extremes<T> {
    pub items: Vec<T>,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub prefix: String,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub count: usize,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    /// 0-based position among the checked tokens
    pub index: usize,
    pub word: String,
    pub suggestion: Option<String>,
    pub score: u8,
    pub edits: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpellCheckResult {
    pub misspellings: Vec<Misspelling>,
}

impl SpellCheckResult {
    pub fn count(&self) -> usize {
        self.misspellings.len()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.misspellings.iter().map(|m| m.index).collect()
    }
}
