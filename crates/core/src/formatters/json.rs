use crate::analyzer::ContentQuality;
use crate::{ClaritasError, Result};
use serde::Serialize;

/// Complete JSON report structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Label for the analyzed source (path, title), if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The quality metrics record
    pub quality: ContentQuality,
}

/// Configuration for JSON report output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Label for the analyzed source, included when set
    pub source: Option<String>,
    /// Pretty print JSON output
    pub pretty: bool,
}

/// JSON formatter for rendering quality reports
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    /// Render a quality record as a JSON report
    pub fn convert(&self, quality: &ContentQuality) -> Result<String> {
        convert_to_json(quality, &self.config)
    }
}

/// Render a quality record as a JSON report with the given configuration
pub fn convert_to_json(quality: &ContentQuality, config: &JsonConfig) -> Result<String> {
    let report = JsonReport { source: config.source.clone(), quality: quality.clone() };

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };

    rendered.map_err(|e| ClaritasError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;

    #[test]
    fn test_json_report_structure() {
        let quality = analyze("## Title\n\nSome content. More content.");
        let json = convert_to_json(&quality, &JsonConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("quality").is_some());
        let quality_value = &value["quality"];
        assert!(quality_value.get("readability_score").is_some());
        assert!(quality_value.get("word_count").is_some());
        assert!(quality_value.get("uniqueness_indicators").is_some());
        assert!(quality_value.get("suggested_improvements").is_some());
    }

    #[test]
    fn test_source_omitted_when_unset() {
        let quality = analyze("Body.");
        let json = convert_to_json(&quality, &JsonConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("source").is_none());
    }

    #[test]
    fn test_source_included_when_set() {
        let quality = analyze("Body.");
        let config = JsonConfig { source: Some("draft.md".to_string()), pretty: false };
        let json = convert_to_json(&quality, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "draft.md");
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let quality = analyze("Body.");

        let compact = convert_to_json(&quality, &JsonConfig::default()).unwrap();
        assert!(!compact.contains('\n'));

        let pretty = convert_to_json(&quality, &JsonConfig { pretty: true, ..Default::default() }).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_quality_round_trips_through_report() {
        let quality = analyze("One sentence here. Another one there.");
        let json = convert_to_json(&quality, &JsonConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let back: ContentQuality = serde_json::from_value(value["quality"].clone()).unwrap();
        assert_eq!(back, quality);
    }

    #[test]
    fn test_formatter_struct_matches_free_function() {
        let quality = analyze("Some text here.");
        let config = JsonConfig::default();
        let formatter = JsonFormatter::new(config.clone());

        assert_eq!(formatter.convert(&quality).unwrap(), convert_to_json(&quality, &config).unwrap());
    }
}
