//! Flesch-style readability scoring.
//!
//! Combines average sentence length and average syllables per word into a
//! 0-100 ease score, plus the reading-time estimate derived from word count.

/// Base constant of the Flesch Reading Ease formula.
pub const FLESCH_BASE: f64 = 206.835;

/// Penalty weight per average word of sentence length.
pub const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;

/// Penalty weight per average syllable of word length.
pub const SYLLABLE_WEIGHT: f64 = 84.6;

/// Reading speed used for the time estimate, in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Compute the Flesch Reading Ease score, rounded then clamped to 0-100.
///
/// Rounding happens before clamping, so a raw score of 100.4 rounds to 100
/// and one of -0.3 rounds to 0 without ever leaving the valid range.
/// Short, low-syllable text can push the raw value well above 100; it is
/// reported as exactly 100.
pub fn flesch_reading_ease(avg_words_per_sentence: f64, avg_syllables_per_word: f64) -> u8 {
    let raw = FLESCH_BASE
        - SENTENCE_LENGTH_WEIGHT * avg_words_per_sentence
        - SYLLABLE_WEIGHT * avg_syllables_per_word;

    raw.round().clamp(0.0, 100.0) as u8
}

/// Estimate reading time in whole minutes, rounding up.
///
/// Zero words yields zero minutes; any non-empty text yields at least one.
pub fn estimated_read_time(word_count: usize, words_per_minute: usize) -> u32 {
    word_count.div_ceil(words_per_minute.max(1)) as u32
}

/// Round a ratio to one decimal place for display.
///
/// The unrounded value still feeds [`flesch_reading_ease`]; only the
/// reported average (and the indicator thresholds applied to it) use this.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
