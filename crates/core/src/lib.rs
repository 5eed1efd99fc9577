pub mod analyzer;
pub mod error;
pub mod formatters;
pub mod indicators;
pub mod input;
pub mod lexical;
pub mod score;
pub mod strip;

pub use analyzer::{Analyzer, AnalyzerConfig, AnalyzerConfigBuilder, ContentQuality, analyze, analyze_with_config};
pub use error::{ClaritasError, Result};
pub use formatters::{JsonConfig, JsonFormatter, JsonReport, TextConfig, TextFormatter};
pub use formatters::{convert_to_json, convert_to_text};
#[doc(hidden)]
pub use indicators::{IndicatorConfig, suggested_improvements, uniqueness_indicators};
pub use input::{read_file, read_stdin};
#[doc(hidden)]
pub use lexical::{LexicalStats, split_sentences, split_words, syllables_in_word};
#[doc(hidden)]
pub use score::{estimated_read_time, flesch_reading_ease, round_to_tenth};
pub use strip::{StripConfig, strip_markdown};
