use anyhow::{Context, Result};
use fst::{Automaton, IntoStreamer, Set, Streamer};
use std::fs;
use std::path::Path;

/// Correct-spelling word list, kept in file order.
///
/// Order matters for fuzzy matching: among equally good candidates the
/// first one listed wins. Exact lookups go through an FST set instead.
#[derive(Debug)]
pub struct Dictionary {
    words: Vec<String>,
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load a word list, one word per line. Blank lines are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;

        let dictionary = Self::from_words(content.lines().map(str::to_string))?;
        tracing::debug!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );

        Ok(dictionary)
    }

    /// Build from an in-memory word list, trimming entries and dropping blanks
    pub fn from_words<I>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        let mut sorted_words = words.clone();
        sorted_words.sort();
        sorted_words.dedup();

        let set = Set::<Vec<u8>>::from_iter(sorted_words.iter())
            .context("Failed to build dictionary index")?;

        Ok(Self { words, set })
    }

    /// Check if word exists in dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    /// Get all words with a given prefix, in byte order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut stream = self
            .set
            .search(fst::automaton::Str::new(prefix).starts_with())
            .into_stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                results.push(word);
            }
        }

        results
    }

    /// Words in file order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
