use regex::Regex;

/// Configuration for markdown stripping
///
/// Each flag enables one rewrite rule. Rules run in a fixed order (headings,
/// emphasis, links, fenced code, inline code); later rules assume earlier
/// ones already removed their markers.
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Whether to strip leading heading markers (`#` through `######`)
    pub strip_headings: bool,
    /// Whether to strip bold/italic markers (`**`, `__`, `*`, `_`)
    pub strip_emphasis: bool,
    /// Whether to replace `[text](url)` links with their text
    pub replace_links: bool,
    /// Whether to remove fenced code blocks, content included
    pub remove_code_blocks: bool,
    /// Whether to remove inline code spans, content included
    pub remove_inline_code: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            strip_headings: true,
            strip_emphasis: true,
            replace_links: true,
            remove_code_blocks: true,
            remove_inline_code: true,
        }
    }
}

/// Strip markdown markup from text, leaving plain prose for lexical analysis
///
/// This is intentionally lossy and heuristic, not a full markdown parser.
/// Punctuation, numerals, and newlines are left intact so that downstream
/// word and sentence splitting sees them. Malformed or nested markup may
/// leave residual markers.
pub fn strip_markdown(markdown: &str, config: &StripConfig) -> String {
    let mut stripped = markdown.to_string();

    if config.strip_headings {
        stripped = strip_headings(&stripped);
    }

    if config.strip_emphasis {
        stripped = strip_emphasis(&stripped);
    }

    if config.replace_links {
        stripped = replace_links(&stripped);
    }

    if config.remove_code_blocks {
        stripped = remove_code_blocks(&stripped);
    }

    if config.remove_inline_code {
        stripped = remove_inline_code(&stripped);
    }

    stripped
}

/// Remove heading markers at the start of a line
///
/// Matches 1-6 `#` characters followed by a single space. Only the markers
/// are removed; the heading text stays and counts as prose.
fn strip_headings(text: &str) -> String {
    let re = Regex::new(r"(?m)^#{1,6} ").unwrap();
    re.replace_all(text, "").to_string()
}

/// Remove bold and italic markers
///
/// `**` and `__` are matched before the single-character markers so a bold
/// pair never decays into two stray italics.
fn strip_emphasis(text: &str) -> String {
    let re = Regex::new(r"\*\*|__|\*|_").unwrap();
    re.replace_all(text, "").to_string()
}

/// Replace `[text](url)` links with their visible text
fn replace_links(text: &str) -> String {
    let re = Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap();
    re.replace_all(text, "$1").to_string()
}

/// Remove fenced code blocks, including their content
///
/// An unterminated fence is left in place rather than swallowing the rest
/// of the document.
fn remove_code_blocks(text: &str) -> String {
    let re = Regex::new(r"(?s)```.*?```").unwrap();
    re.replace_all(text, "").to_string()
}

/// Remove inline code spans, including their content
fn remove_inline_code(text: &str) -> String {
    let re = Regex::new(r"`[^`]*`").unwrap();
    re.replace_all(text, "").to_string()
}
