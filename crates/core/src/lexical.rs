//! Word, sentence, and syllable counting over plain text.
//!
//! These counters feed the readability formula in [`crate::score`]. The
//! syllable counter is a rule-based English approximation built on vowel-run
//! detection; it makes no attempt at dictionary-level accuracy.

use regex::Regex;

/// Aggregate lexical counts for a piece of plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalStats {
    /// Count of whitespace-delimited non-empty tokens.
    pub word_count: usize,
    /// Count of non-empty sentence segments, floored at 1.
    pub sentence_count: usize,
    /// Sum of per-word syllable estimates.
    pub total_syllables: usize,
}

impl LexicalStats {
    /// Count words, sentences, and syllables in stripped plain text.
    pub fn from_text(text: &str) -> Self {
        let words = split_words(text);
        let word_count = words.len();
        let sentence_count = split_sentences(text).len().max(1);
        let total_syllables = words.iter().map(|word| syllables_in_word(word)).sum();

        Self { word_count, sentence_count, total_syllables }
    }
}

/// Split text into words on runs of whitespace, discarding empty tokens.
///
/// Punctuation stays attached to its word; the syllable counter strips it
/// per word instead.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences on runs of `.`, `!`, or `?`.
///
/// A run of terminal punctuation (`?!`, `...`) counts as one delimiter.
/// Empty and whitespace-only segments are discarded, so `"One. Two."` yields
/// two sentences, not three.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let re = Regex::new(r"[.!?]+").unwrap();
    re.split(text).filter(|segment| !segment.trim().is_empty()).collect()
}

/// Estimate the syllable count of a single word.
///
/// The heuristic:
/// 1. Lower-case and drop every character outside `a-z`.
/// 2. Words of 3 or fewer letters count as one syllable.
/// 3. Strip a trailing `es`/`ed`/`e` preceded by a non-vowel (silent-e
///    endings), then strip a single leading `y`.
/// 4. Count maximal runs of 1-2 vowel-or-y characters; floor at 1.
pub fn syllables_in_word(word: &str) -> usize {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();

    if cleaned.len() <= 3 {
        return 1;
    }

    let silent_endings = Regex::new(r"[^aeiouy](?:es|ed|e)$").unwrap();
    let trimmed = silent_endings.replace(&cleaned, "");
    let trimmed = trimmed.strip_prefix('y').unwrap_or(&trimmed);

    let nuclei = Regex::new(r"[aeiouy]{1,2}").unwrap();
    nuclei.find_iter(trimmed).count().max(1)
}
