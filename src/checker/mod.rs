pub mod dictionary;
pub mod similarity;

use crate::parser::plaintext::{is_lowercase_word, strip_punctuation, whitespace_tokens};
use crate::parser::Document;
use crate::{Config, Misspelling, SpellCheckResult};
use dictionary::Dictionary;
use rayon::prelude::*;
use std::collections::HashSet;

/// Score at or above which a token counts as correctly spelled
const PERFECT_SCORE: u8 = 100;

pub struct SpellChecker<'a> {
    dictionary: &'a Dictionary,
    stop_words: HashSet<String>,
    punctuation: &'a [char],
}

impl<'a> SpellChecker<'a> {
    pub fn new(dictionary: &'a Dictionary, config: &'a Config) -> Self {
        Self {
            dictionary,
            stop_words: config.stop_words.iter().map(|w| w.to_lowercase()).collect(),
            punctuation: &config.punctuation,
        }
    }

    /// Flag every checkable token with no perfect dictionary match.
    ///
    /// Only fully lowercase tokens are checked; indices count positions in
    /// that filtered stream, stop words included.
    pub fn check(&self, document: &Document) -> SpellCheckResult {
        let text = strip_punctuation(&document.joined(), self.punctuation);
        let candidates: Vec<&str> = whitespace_tokens(&text)
            .into_iter()
            .filter(|token| is_lowercase_word(token))
            .collect();

        let misspellings: Vec<Misspelling> = candidates
            .par_iter()
            .enumerate()
            .filter(|(_, word)| !self.stop_words.contains(**word))
            .filter_map(|(index, word)| self.check_word(index, word))
            .collect();

        tracing::info!(
            checked = candidates.len(),
            misspelled = misspellings.len(),
            "spell check finished"
        );

        SpellCheckResult { misspellings }
    }

    fn check_word(&self, index: usize, word: &str) -> Option<Misspelling> {
        if self.dictionary.contains(word) {
            return None;
        }

        let (suggestion, score) = self.best_match(word);
        if score >= PERFECT_SCORE {
            return None;
        }

        Some(Misspelling {
            index,
            word: word.to_string(),
            edits: suggestion
                .map(|s| similarity::edit_distance(word, s))
                .unwrap_or_else(|| word.chars().count()),
            suggestion: suggestion.map(str::to_string),
            score,
        })
    }

    /// Highest-scoring dictionary word; the first one listed wins ties.
    fn best_match(&self, word: &str) -> (Option<&'a str>, u8) {
        let mut best: Option<&'a str> = None;
        let mut best_score = 0;

        for candidate in self.dictionary.words() {
            let score = similarity::ratio(word, candidate);
            if score > best_score {
                best_score = score;
                best = Some(candidate.as_str());
                if score >= PERFECT_SCORE {
                    break;
                }
            }
        }

        (best, best_score)
    }
}
