//! Main content quality analysis API.
//!
//! This module provides the primary API for scoring markdown content. The
//! main entry point is the [`Analyzer`] struct, along with the convenience
//! functions [`analyze`] and [`analyze_with_config`].
//!
//! # Example
//!
//! ```rust
//! use claritas_core::analyze;
//!
//! let quality = analyze("## Intro\n\nShort sentences read well. They score high.");
//! assert!(quality.readability_score >= 50);
//! assert_eq!(quality.sentence_count, 2);
//! ```

use crate::indicators::{IndicatorConfig, suggested_improvements, uniqueness_indicators};
use crate::lexical::LexicalStats;
use crate::score::{DEFAULT_WORDS_PER_MINUTE, estimated_read_time, flesch_reading_ease, round_to_tenth};
use crate::strip::{StripConfig, strip_markdown};
use serde::{Deserialize, Serialize};

/// Quality metrics for a piece of markdown content.
///
/// Produced by [`analyze`] as a pure function of the input text; identical
/// input always yields an identical record. Deserialization is strict:
/// unknown fields are rejected rather than silently dropped, so loosely
/// shaped upstream JSON cannot masquerade as a quality record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentQuality {
    /// Flesch-style reading ease, 0-100; higher is easier.
    pub readability_score: u8,

    /// Estimated reading time in whole minutes, rounded up.
    pub estimated_read_time: u32,

    /// Count of whitespace-delimited words after markdown stripping.
    pub word_count: usize,

    /// Count of sentences, floored at 1.
    pub sentence_count: usize,

    /// Average words per sentence, rounded to one decimal place.
    pub avg_words_per_sentence: f64,

    /// Detected strengths, in rule-evaluation order.
    pub uniqueness_indicators: Vec<String>,

    /// Suggested improvements, in rule-evaluation order.
    pub suggested_improvements: Vec<String>,
}

/// Configuration for the quality analyzer.
///
/// Defaults reproduce the reference thresholds; override individual values
/// through the builder.
///
/// # Example
///
/// ```rust
/// use claritas_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .words_per_minute(250)
///     .long_form_words(1200)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Markdown stripping rules applied before counting.
    pub strip: StripConfig,

    /// Thresholds for the strength/improvement rule tables.
    pub indicators: IndicatorConfig,

    /// Reading speed for the time estimate (default: 200 wpm).
    pub words_per_minute: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            strip: StripConfig::default(),
            indicators: IndicatorConfig::default(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new builder for AnalyzerConfig.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for AnalyzerConfig.
///
/// Provides a fluent API for configuring the analyzer.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the reading speed in words per minute.
    pub fn words_per_minute(mut self, value: usize) -> Self {
        self.config.words_per_minute = value;
        self
    }

    /// Sets the long-form word threshold.
    pub fn long_form_words(mut self, value: usize) -> Self {
        self.config.indicators.long_form_words = value;
        self
    }

    /// Sets the word count under which expansion is suggested.
    pub fn min_depth_words(mut self, value: usize) -> Self {
        self.config.indicators.min_depth_words = value;
        self
    }

    /// Sets the readability floor under which simpler wording is suggested.
    pub fn accessible_score_floor(mut self, value: u8) -> Self {
        self.config.indicators.accessible_score_floor = value;
        self
    }

    /// Sets the markdown stripping rules.
    pub fn strip(mut self, value: StripConfig) -> Self {
        self.config.strip = value;
        self
    }

    /// Builds the final AnalyzerConfig.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Markdown content quality analyzer.
///
/// Wraps an [`AnalyzerConfig`] so a configured instance can be reused
/// across many documents. The analysis itself is a pure, synchronous
/// function of the input string; an `Analyzer` is safe to share across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Score a markdown document.
    ///
    /// Total over all inputs: empty or degenerate text resolves to floor
    /// values (one sentence, zero words) rather than failing.
    pub fn analyze(&self, markdown: &str) -> ContentQuality {
        let plain = strip_markdown(markdown, &self.config.strip);
        let stats = LexicalStats::from_text(&plain);

        let avg_words_per_sentence = stats.word_count as f64 / stats.sentence_count as f64;
        let avg_syllables_per_word = stats.total_syllables as f64 / stats.word_count.max(1) as f64;

        let readability_score = flesch_reading_ease(avg_words_per_sentence, avg_syllables_per_word);
        let estimated_read_time = estimated_read_time(stats.word_count, self.config.words_per_minute);

        // Indicator rules deliberately see the rounded average, matching the
        // reported value rather than the formula input.
        let reported_avg = round_to_tenth(avg_words_per_sentence);

        let uniqueness_indicators =
            uniqueness_indicators(markdown, stats.word_count, reported_avg, &self.config.indicators);
        let suggested_improvements = suggested_improvements(
            markdown,
            stats.word_count,
            reported_avg,
            readability_score,
            &self.config.indicators,
        );

        ContentQuality {
            readability_score,
            estimated_read_time,
            word_count: stats.word_count,
            sentence_count: stats.sentence_count,
            avg_words_per_sentence: reported_avg,
            uniqueness_indicators,
            suggested_improvements,
        }
    }
}

/// Score a markdown document with default configuration.
pub fn analyze(markdown: &str) -> ContentQuality {
    Analyzer::new().analyze(markdown)
}

/// Score a markdown document with custom configuration.
pub fn analyze_with_config(markdown: &str, config: &AnalyzerConfig) -> ContentQuality {
    Analyzer::with_config(config.clone()).analyze(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators;

    /// A 15-words-per-sentence line of one-syllable words, repeatable to any
    /// length without changing the per-sentence or per-word averages.
    const PLAIN_SENTENCE: &str = "The cat sat on the mat and then it ran to the red barn fast. ";

    fn article(sentences: usize) -> String {
        PLAIN_SENTENCE.repeat(sentences)
    }

    #[test]
    fn test_two_word_sentence_scores_maximum() {
        let quality = analyze("Cats run.");

        assert_eq!(quality.word_count, 2);
        assert_eq!(quality.sentence_count, 1);
        assert_eq!(quality.avg_words_per_sentence, 2.0);
        // raw score 206.835 - 2.03 - 84.6 = 120.205, clamped to 100
        assert_eq!(quality.readability_score, 100);
        assert_eq!(quality.estimated_read_time, 1);
    }

    #[test]
    fn test_empty_input_floor_values() {
        let quality = analyze("");

        assert_eq!(quality.word_count, 0);
        assert_eq!(quality.sentence_count, 1);
        assert_eq!(quality.avg_words_per_sentence, 0.0);
        assert_eq!(quality.estimated_read_time, 0);
        assert_eq!(quality.readability_score, 100);
    }

    #[test]
    fn test_whitespace_only_input() {
        let quality = analyze(" \n\t ");
        assert_eq!(quality.word_count, 0);
        assert_eq!(quality.sentence_count, 1);
        assert_eq!(quality.readability_score, 100);
    }

    #[test]
    fn test_no_terminal_punctuation_is_one_sentence() {
        let quality = analyze("five words but no period");
        assert_eq!(quality.sentence_count, 1);
        assert_eq!(quality.word_count, 5);
    }

    #[test]
    fn test_markdown_markers_do_not_count_as_words() {
        let plain = analyze("Cats run.");
        let marked = analyze("**Cats** `run.`");

        // inline code is removed entirely, bold survives as a word
        assert_eq!(marked.word_count, 1);
        assert_eq!(plain.word_count, 2);
    }

    #[test]
    fn test_determinism() {
        let md = "## Title\n\nSome repeatable content. With two sentences.";
        assert_eq!(analyze(md), analyze(md));
    }

    #[test]
    fn test_well_formed_article_all_strengths_no_improvements() {
        // 70 prose sentences x 15 one-syllable words, plus the heading words
        // and the numbered line: 1062 words over 75 sentence segments
        let mut md = String::from("## Intro\n\n");
        md.push_str(&article(35));
        md.push_str("\n\n## Detail\n\n1. one 2. two 3. three 4. four 5. five\n\n");
        md.push_str(&article(35));

        let quality = analyze(&md);

        assert_eq!(quality.word_count, 1062);
        assert_eq!(quality.sentence_count, 75);
        assert_eq!(quality.avg_words_per_sentence, 14.2);
        assert!(quality.readability_score >= 50);
        assert_eq!(
            quality.uniqueness_indicators,
            vec![
                indicators::LONG_FORM,
                indicators::WELL_STRUCTURED,
                indicators::NUMBERED_POINTS,
                indicators::CONCISE_SENTENCES,
            ]
        );
        assert!(quality.suggested_improvements.is_empty());
    }

    #[test]
    fn test_short_unstructured_note_gets_improvements() {
        let quality = analyze("A tiny note without much to it.");

        assert!(
            quality
                .suggested_improvements
                .contains(&indicators::EXPAND_CONTENT.to_string())
        );
        assert!(
            quality
                .suggested_improvements
                .contains(&indicators::ADD_HEADINGS.to_string())
        );
    }

    #[test]
    fn test_score_bounds_hold_for_varied_inputs() {
        for md in [
            "",
            "word",
            "!!!",
            "### Heading only",
            "Extraordinarily incomprehensible multisyllabic terminology predominates unnecessarily.",
            &article(100),
        ] {
            let quality = analyze(md);
            assert!(quality.readability_score <= 100);
            assert!(quality.sentence_count >= 1);
        }
    }

    #[test]
    fn test_read_time_uses_configured_rate() {
        let config = AnalyzerConfig::builder().words_per_minute(10).build();
        let quality = analyze_with_config(&article(2), &config);

        assert_eq!(quality.word_count, 30);
        assert_eq!(quality.estimated_read_time, 3);
    }

    #[test]
    fn test_builder_overrides_thresholds() {
        let config = AnalyzerConfig::builder().long_form_words(20).min_depth_words(10).build();
        let quality = analyze_with_config(&article(2), &config);

        assert!(
            quality
                .uniqueness_indicators
                .contains(&indicators::LONG_FORM.to_string())
        );
        assert!(
            !quality
                .suggested_improvements
                .contains(&indicators::EXPAND_CONTENT.to_string())
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let quality = analyze("## Title\n\nSome content here. More content there.");
        let json = serde_json::to_string(&quality).unwrap();
        let back: ContentQuality = serde_json::from_str(&json).unwrap();
        assert_eq!(quality, back);
    }

    #[test]
    fn test_deserialization_rejects_unknown_fields() {
        let json = r#"{
            "readability_score": 80,
            "estimated_read_time": 1,
            "word_count": 10,
            "sentence_count": 2,
            "avg_words_per_sentence": 5.0,
            "uniqueness_indicators": [],
            "suggested_improvements": [],
            "confidence": 0.9
        }"#;

        assert!(serde_json::from_str::<ContentQuality>(json).is_err());
    }

    #[test]
    fn test_deserialization_rejects_missing_fields() {
        let json = r#"{"readability_score": 80}"#;
        assert!(serde_json::from_str::<ContentQuality>(json).is_err());
    }

    #[test]
    fn test_analyzer_reuse() {
        let analyzer = Analyzer::new();
        let first = analyzer.analyze("One sentence here.");
        let second = analyzer.analyze("One sentence here.");
        assert_eq!(first, second);
    }
}
