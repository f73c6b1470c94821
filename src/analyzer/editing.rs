use super::DocumentAnalyzer;
use crate::parser::plaintext::{is_title_case, split_punctuation, to_title_case, whitespace_tokens};
use crate::Replacement;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl DocumentAnalyzer {
    /// 1-based positions of `word` among the whitespace-separated words.
    /// Matching ignores case and punctuation around the word.
    pub fn find_word(&self, word: &str) -> Result<Vec<usize>> {
        let document = self.load()?;
        let joined = document.joined();
        let needle = word.to_lowercase();

        Ok(whitespace_tokens(&joined)
            .into_iter()
            .enumerate()
            .filter(|(_, token)| {
                let (_, core, _) = split_punctuation(token, &self.config.punctuation);
                core.to_lowercase() == needle
            })
            .map(|(i, _)| i + 1)
            .collect())
    }

    /// Replace every occurrence of `original` with `new`, line by line.
    ///
    /// A title-case occurrence gets a title-case replacement, anything else
    /// gets it lower-cased. Punctuation around the occurrence is kept. Words
    /// in each line are re-joined by single spaces. The file itself is not
    /// touched.
    pub fn replace_word(&self, original: &str, new: &str) -> Result<Replacement> {
        let document = self.load()?;
        let target = original.to_lowercase();
        let mut count = 0;

        let lines = document
            .lines()
            .iter()
            .map(|line| {
                whitespace_tokens(line)
                    .into_iter()
                    .map(|token| {
                        let (lead, core, trail) = split_punctuation(token, &self.config.punctuation);
                        if core.is_empty() || core.to_lowercase() != target {
                            return token.to_string();
                        }

                        count += 1;
                        let replacement = if is_title_case(core) {
                            to_title_case(new)
                        } else {
                            new.to_lowercase()
                        };
                        format!("{}{}{}", lead, replacement, trail)
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        Ok(Replacement { count, lines })
    }

    /// Write the document, with `original` replaced by `new`, to `path`.
    /// Returns the number of replacements made.
    pub fn write_document(&self, path: impl AsRef<Path>, original: &str, new: &str) -> Result<usize> {
        let path = path.as_ref();
        let replacement = self.replace_word(original, new)?;

        let mut content = String::new();
        for line in &replacement.lines {
            content.push_str(line);
            content.push('\n');
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write document: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            replacements = replacement.count,
            "document written"
        );

        Ok(replacement.count)
    }
}
