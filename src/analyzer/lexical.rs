use super::{round_to, DocumentAnalyzer};
use crate::checker::dictionary::Dictionary;
use crate::error::AnalysisError;
use crate::parser::plaintext::{sentences, whitespace_tokens, words};
use crate::parser::Document;
use crate::{Completion, Extremes};
use anyhow::Result;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Clone, Copy)]
enum Extreme {
    Longest,
    Shortest,
}

/// All distinct items whose length is extremal, in first-occurrence order.
fn extremes<T, F>(items: Vec<T>, length: F, which: Extreme) -> Option<Extremes<T>>
where
    T: PartialEq,
    F: Fn(&T) -> usize,
{
    let target = match which {
        Extreme::Longest => items.iter().map(&length).max()?,
        Extreme::Shortest => items.iter().map(&length).min()?,
    };

    let mut tied: Vec<T> = Vec::new();
    for item in items {
        if length(&item) == target && !tied.contains(&item) {
            tied.push(item);
        }
    }

    Some(Extremes {
        items: tied,
        length: target,
    })
}

/// Distinct words by descending count, ties in order of first appearance.
fn ranked(words: &[String]) -> Vec<(&str, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, word) in words.iter().enumerate() {
        counts.entry(word.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .map(|(word, count, _)| (word, count))
        .collect()
}

fn fingerprint(document: &Document) -> BTreeMap<char, usize> {
    let mut fingerprint = BTreeMap::new();
    for line in document.lines() {
        for ch in line.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() {
                *fingerprint.entry(ch).or_insert(0) += 1;
            }
        }
    }
    fingerprint
}

impl DocumentAnalyzer {
    pub fn longest_word(&self) -> Result<Extremes<String>> {
        self.word_extremes(Extreme::Longest, "longest word")
    }

    pub fn shortest_word(&self) -> Result<Extremes<String>> {
        self.word_extremes(Extreme::Shortest, "shortest word")
    }

    fn word_extremes(&self, which: Extreme, operation: &'static str) -> Result<Extremes<String>> {
        let document = self.load()?;
        let words = self.significant_words(&document);
        extremes(words, |w| w.chars().count(), which)
            .ok_or_else(|| AnalysisError::no_words(operation).into())
    }

    /// Sentences with the most words
    pub fn longest_sentence(&self) -> Result<Extremes<String>> {
        self.sentence_extremes(Extreme::Longest, "longest sentence")
    }

    pub fn shortest_sentence(&self) -> Result<Extremes<String>> {
        self.sentence_extremes(Extreme::Shortest, "shortest sentence")
    }

    fn sentence_extremes(
        &self,
        which: Extreme,
        operation: &'static str,
    ) -> Result<Extremes<String>> {
        let document = self.load()?;
        let joined = document.joined();
        let sentences: Vec<String> = sentences(&joined).into_iter().map(str::to_string).collect();
        extremes(sentences, |s| whitespace_tokens(s).len(), which)
            .ok_or_else(|| AnalysisError::no_sentences(operation).into())
    }

    /// The `n` most frequent significant words, most frequent first
    #[tracing::instrument(skip(self))]
    pub fn most_frequent_words(&self, n: usize) -> Result<Vec<String>> {
        let document = self.load()?;
        let words = self.significant_words(&document);
        Ok(ranked(&words)
            .into_iter()
            .take(n)
            .map(|(word, _)| word.to_string())
            .collect())
    }

    pub fn num_distinct_words(&self) -> Result<usize> {
        let document = self.load()?;
        let words = self.significant_words(&document);
        Ok(words.iter().collect::<HashSet<_>>().len())
    }

    /// Distinct significant words starting with `prefix`, sorted alphabetically
    pub fn words_by_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let document = self.load()?;
        let vocabulary = Dictionary::from_words(self.significant_words(&document))?;
        Ok(vocabulary.words_with_prefix(&prefix.to_lowercase()))
    }

    /// Occurrences of each letter `a`-`z`, ignoring case
    pub fn character_fingerprint(&self) -> Result<BTreeMap<char, usize>> {
        Ok(fingerprint(&self.load()?))
    }

    /// Share of each letter among all non-punctuation characters, as a
    /// percentage rounded to 3 decimals, sorted by letter.
    pub fn letter_frequencies(&self) -> Result<Vec<(char, f64)>> {
        let document = self.load()?;
        let total: usize = document
            .lines()
            .iter()
            .flat_map(|line| line.chars())
            .filter(|&ch| !self.config.is_punctuation(ch))
            .count();

        if total == 0 {
            return Ok(Vec::new());
        }

        Ok(fingerprint(&document)
            .into_iter()
            .map(|(letter, count)| (letter, round_to(count as f64 * 100.0 / total as f64, 3)))
            .collect())
    }

    /// Up to `autocomplete_limit` words starting with `prefix`, most used first.
    /// Stop words are candidates too.
    pub fn auto_complete(&self, prefix: &str) -> Result<Completion> {
        let document = self.load()?;
        let all_words = words(&document.joined());
        let needle = prefix.to_lowercase();

        let suggestions = ranked(&all_words)
            .into_iter()
            .filter(|(word, _)| word.starts_with(&needle))
            .take(self.config.autocomplete_limit)
            .map(|(word, _)| word.to_string())
            .collect();

        Ok(Completion {
            prefix: prefix.to_string(),
            words: suggestions,
        })
    }
}
