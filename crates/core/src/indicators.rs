use regex::Regex;

/// Strength emitted for articles past the long-form word threshold.
pub const LONG_FORM: &str = "Long-form content";

/// Strength emitted when the markdown carries section headings.
pub const WELL_STRUCTURED: &str = "Well-structured with headings";

/// Strength emitted when the markdown uses numbered points.
pub const NUMBERED_POINTS: &str = "Numbered points included";

/// Strength emitted for short average sentence length.
pub const CONCISE_SENTENCES: &str = "Clear, concise sentences";

/// Improvement emitted for long average sentence length.
pub const BREAK_UP_SENTENCES: &str = "Consider breaking up long sentences for better readability";

/// Improvement emitted for low readability scores.
pub const SIMPLER_WORDS: &str = "Use simpler words to improve accessibility";

/// Improvement emitted for thin content.
pub const EXPAND_CONTENT: &str = "Consider expanding content for more depth";

/// Improvement emitted when the markdown has no section headings.
pub const ADD_HEADINGS: &str = "Add section headings to improve structure";

/// Marker substring that identifies section headings in raw markdown.
const HEADING_MARKER: &str = "##";

/// Pattern for a numbered point: a digit sequence followed by a dot.
const NUMBERED_POINT_PATTERN: &str = r"\d+\.";

/// Thresholds for the strength/improvement rule tables
///
/// Structural rules (headings, numbered points) look at the ORIGINAL
/// markdown, not the stripped prose; sentence-length rules use the rounded
/// reported average.
#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    /// Word count above which content counts as long-form
    pub long_form_words: usize,
    /// Word count below which expansion is suggested
    pub min_depth_words: usize,
    /// Average sentence length below which sentences count as concise
    pub concise_sentence_limit: f64,
    /// Average sentence length above which breaking up is suggested
    pub long_sentence_limit: f64,
    /// Readability score below which simpler wording is suggested
    pub accessible_score_floor: u8,
    /// Minimum numbered-point matches for the numbered-points strength
    pub min_numbered_points: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            long_form_words: 800,
            min_depth_words: 500,
            concise_sentence_limit: 20.0,
            long_sentence_limit: 25.0,
            accessible_score_floor: 50,
            min_numbered_points: 5,
        }
    }
}

/// Detect content strengths
///
/// Rules fire independently; any subset may match. Evaluation order is
/// fixed and determines list order: long-form, headings, numbered points,
/// concise sentences.
pub fn uniqueness_indicators(
    markdown: &str,
    word_count: usize,
    avg_words_per_sentence: f64,
    config: &IndicatorConfig,
) -> Vec<String> {
    let mut indicators = Vec::new();

    if word_count > config.long_form_words {
        indicators.push(LONG_FORM.to_string());
    }

    if markdown.contains(HEADING_MARKER) {
        indicators.push(WELL_STRUCTURED.to_string());
    }

    if count_numbered_points(markdown) >= config.min_numbered_points {
        indicators.push(NUMBERED_POINTS.to_string());
    }

    if avg_words_per_sentence < config.concise_sentence_limit {
        indicators.push(CONCISE_SENTENCES.to_string());
    }

    indicators
}

/// Detect content weaknesses
///
/// Same rule-table shape as [`uniqueness_indicators`]: long sentences, low
/// readability, thin content, missing headings, in that order.
pub fn suggested_improvements(
    markdown: &str,
    word_count: usize,
    avg_words_per_sentence: f64,
    readability_score: u8,
    config: &IndicatorConfig,
) -> Vec<String> {
    let mut improvements = Vec::new();

    if avg_words_per_sentence > config.long_sentence_limit {
        improvements.push(BREAK_UP_SENTENCES.to_string());
    }

    if readability_score < config.accessible_score_floor {
        improvements.push(SIMPLER_WORDS.to_string());
    }

    if word_count < config.min_depth_words {
        improvements.push(EXPAND_CONTENT.to_string());
    }

    if !markdown.contains(HEADING_MARKER) {
        improvements.push(ADD_HEADINGS.to_string());
    }

    improvements
}

/// Count numbered points (`1.`, `42.`) in raw markdown.
fn count_numbered_points(markdown: &str) -> usize {
    let re = Regex::new(NUMBERED_POINT_PATTERN).unwrap();
    re.find_iter(markdown).count()
}
