use crate::analyzer::ContentQuality;

/// Configuration for plain text report output
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Include the report header line
    pub include_header: bool,

    /// Label shown in the header for the analyzed source (path, title)
    pub source: Option<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { include_header: true, source: None }
    }
}

/// Plain text formatter for rendering quality reports
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Render a quality record as a plain text report
    pub fn convert(&self, quality: &ContentQuality) -> String {
        convert_to_text(quality, &self.config)
    }
}

/// Render a quality record as a plain text report with the given configuration
pub fn convert_to_text(quality: &ContentQuality, config: &TextConfig) -> String {
    let mut output = String::new();

    if config.include_header {
        match &config.source {
            Some(source) => output.push_str(&format!("Content quality report: {}\n\n", source)),
            None => output.push_str("Content quality report\n\n"),
        }
    }

    output.push_str(&format!("Readability score:    {}/100\n", quality.readability_score));
    output.push_str(&format!("Estimated read time:  {}\n", format_read_time(quality.estimated_read_time)));
    output.push_str(&format!("Words:                {}\n", quality.word_count));
    output.push_str(&format!("Sentences:            {}\n", quality.sentence_count));
    output.push_str(&format!("Avg words/sentence:   {:.1}\n", quality.avg_words_per_sentence));

    if !quality.uniqueness_indicators.is_empty() {
        output.push_str("\nStrengths:\n");
        for indicator in &quality.uniqueness_indicators {
            output.push_str(&format!("  + {}\n", indicator));
        }
    }

    if !quality.suggested_improvements.is_empty() {
        output.push_str("\nSuggested improvements:\n");
        for improvement in &quality.suggested_improvements {
            output.push_str(&format!("  - {}\n", improvement));
        }
    }

    output
}

/// Format the read-time estimate for display.
///
/// A zero estimate only occurs for empty input and reads better as
/// "< 1 min" than "0 min"; the underlying record keeps the exact value.
fn format_read_time(minutes: u32) -> String {
    if minutes == 0 {
        "< 1 min".to_string()
    } else {
        format!("{} min", minutes)
    }
}
