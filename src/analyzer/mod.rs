//! Document analysis.
//!
//! Every operation reloads the document from disk and re-tokenizes it, so an
//! analyzer never serves stale results after the file changes.

mod editing;
mod lexical;

use crate::checker::dictionary::Dictionary;
use crate::checker::SpellChecker;
use crate::error::AnalysisError;
use crate::parser::plaintext::{sentences, whitespace_tokens, words};
use crate::parser::Document;
use crate::report::chart;
use crate::{Config, SpellCheckResult};
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct DocumentAnalyzer {
    path: PathBuf,
    config: Config,
    stop_set: HashSet<String>,
}

impl DocumentAnalyzer {
    pub fn new(path: impl Into<PathBuf>, config: Config) -> Self {
        let stop_set = config.stop_set();
        Self {
            path: path.into(),
            config,
            stop_set,
        }
    }

    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Config::default())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the document into its ordered lines
    pub fn load_document(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_lines())
    }

    fn load(&self) -> Result<Document> {
        Document::load(&self.path)
    }

    /// Lower-cased words with stop words and punctuation removed
    fn significant_words(&self, document: &Document) -> Vec<String> {
        words(&document.joined())
            .into_iter()
            .filter(|w| !self.stop_set.contains(w))
            .collect()
    }

    pub fn word_count(&self) -> Result<usize> {
        let document = self.load()?;
        Ok(whitespace_tokens(&document.joined()).len())
    }

    /// Characters in the document, line separators excluded
    pub fn character_count(&self) -> Result<usize> {
        Ok(self.load()?.character_count())
    }

    pub fn sentence_count(&self) -> Result<usize> {
        let document = self.load()?;
        Ok(sentences(&document.joined()).len())
    }

    /// Mean characters per whitespace-separated word, rounded to 2 decimals.
    /// Punctuation attached to a word counts towards its length.
    #[tracing::instrument(skip_all)]
    pub fn average_word_length(&self) -> Result<f64> {
        let document = self.load()?;
        let joined = document.joined();
        let tokens = whitespace_tokens(&joined);
        if tokens.is_empty() {
            return Err(AnalysisError::no_words("average word length").into());
        }

        let total: usize = tokens.iter().map(|t| t.chars().count()).sum();
        Ok(round_to(total as f64 / tokens.len() as f64, 2))
    }

    /// Mean words per sentence, rounded to 2 decimals
    #[tracing::instrument(skip_all)]
    pub fn average_sentence_length(&self) -> Result<f64> {
        let document = self.load()?;
        let joined = document.joined();
        let sentences = sentences(&joined);
        if sentences.is_empty() {
            return Err(AnalysisError::no_sentences("average sentence length").into());
        }

        let total: usize = sentences.iter().map(|s| whitespace_tokens(s).len()).sum();
        Ok(round_to(total as f64 / sentences.len() as f64, 2))
    }

    /// Check spelling against the word list at `dictionary_path`, reloaded on every call
    #[tracing::instrument(skip_all, fields(dictionary = %dictionary_path.as_ref().display()))]
    pub fn spell_check(&self, dictionary_path: impl AsRef<Path>) -> Result<SpellCheckResult> {
        let dictionary = Dictionary::load(dictionary_path.as_ref())?;
        let document = self.load()?;
        Ok(SpellChecker::new(&dictionary, &self.config).check(&document))
    }

    /// Render the letter frequencies as a bar chart at the configured chart path
    pub fn letters_bar_chart(&self) -> Result<PathBuf> {
        let frequencies = self.letter_frequencies()?;
        let path = self.config.chart_path.clone();
        chart::render_letter_chart(
            &frequencies,
            &path,
            self.config.chart_width,
            self.config.chart_height,
        )?;
        tracing::info!(path = %path.display(), "letter chart written");
        Ok(path)
    }
}

/// Round to `decimals` places, resolving exact halves to the even digit.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
