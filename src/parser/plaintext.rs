use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.?!]").unwrap();
}

/// Tokens separated by whitespace, punctuation left attached
pub fn whitespace_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Lower-cased words by Unicode word boundaries; punctuation never forms a token
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .map(|w| w.to_string())
        .collect()
}

/// Trimmed, non-empty runs of text between `.`, `?` and `!`
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn strip_punctuation(token: &str, punctuation: &[char]) -> String {
    token.chars().filter(|c| !punctuation.contains(c)).collect()
}

/// Split a token into (leading punctuation, core, trailing punctuation).
pub fn split_punctuation<'a>(token: &'a str, punctuation: &[char]) -> (&'a str, &'a str, &'a str) {
    let core_start = token
        .char_indices()
        .find(|(_, c)| !punctuation.contains(c))
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    let core_end = token[core_start..]
        .char_indices()
        .rev()
        .find(|(_, c)| !punctuation.contains(c))
        .map(|(i, c)| core_start + i + c.len_utf8())
        .unwrap_or(core_start);

    (
        &token[..core_start],
        &token[core_start..core_end],
        &token[core_end..],
    )
}

fn is_cased(ch: char) -> bool {
    ch.is_uppercase() || ch.is_lowercase()
}

/// Every word starts with an uppercase letter followed only by lowercase ones,
/// e.g. `Hello` or `Jean-Luc`. Needs at least one cased character.
pub fn is_title_case(token: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;

    for ch in token.chars() {
        if ch.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if ch.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }

    cased
}

pub fn to_title_case(token: &str) -> String {
    let mut result = String::with_capacity(token.len());
    let mut previous_cased = false;

    for ch in token.chars() {
        if previous_cased {
            result.extend(ch.to_lowercase());
        } else {
            result.extend(ch.to_uppercase());
        }
        previous_cased = is_cased(ch);
    }

    result
}

/// Has at least one cased character and none of them are uppercase.
pub fn is_lowercase_word(token: &str) -> bool {
    token.chars().any(char::is_lowercase) && !token.chars().any(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUNCT: &[char] = &['.', '?', '!', ',', ';', ':'];

    #[test]
    fn test_sentence_splitting() {
        assert_eq!(sentences("Hi. Bye! Go?"), vec!["Hi", "Bye", "Go"]);
        assert_eq!(sentences("Wait... what?!  "), vec!["Wait", "what"]);
        assert!(sentences("  ").is_empty());
    }

    #[test]
    fn test_words_drop_punctuation() {
        assert_eq!(
            words("The cat, the Dog; don't!"),
            vec!["the", "cat", "the", "dog", "don't"]
        );
    }

    #[test]
    fn test_split_punctuation() {
        assert_eq!(split_punctuation("cat,", PUNCT), ("", "cat", ","));
        assert_eq!(split_punctuation("...wait?!", PUNCT), ("...", "wait", "?!"));
        assert_eq!(split_punctuation("e.g.", PUNCT), ("", "e.g", "."));
        assert_eq!(split_punctuation(";;", PUNCT), (";;", "", ""));
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("e.g.,", PUNCT), "eg");
        assert_eq!(strip_punctuation("(cat)", PUNCT), "(cat)");
    }

    #[test]
    fn test_title_case() {
        assert!(is_title_case("Hello"));
        assert!(is_title_case("Jean-Luc"));
        assert!(is_title_case("A"));
        assert!(!is_title_case("HELLO"));
        assert!(!is_title_case("hello"));
        assert!(!is_title_case("McDonald"));
        assert!(!is_title_case("42"));

        assert_eq!(to_title_case("dOG"), "Dog");
        assert_eq!(to_title_case("jean-luc"), "Jean-Luc");
    }

    #[test]
    fn test_lowercase_word() {
        assert!(is_lowercase_word("cat"));
        assert!(is_lowercase_word("don't"));
        assert!(is_lowercase_word("r2d2"));
        assert!(!is_lowercase_word("Cat"));
        assert!(!is_lowercase_word("1984"));
    }
}
