use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use claritas_core::{
    AnalyzerConfig, ContentQuality, JsonConfig, TextConfig, analyze_with_config, convert_to_json, convert_to_text,
    read_file, read_stdin,
};
use owo_colors::OwoColorize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for quality reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Score the readability and quality of markdown content
#[derive(Parser, Debug)]
#[command(name = "claritas")]
#[command(author = "Claritas Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Score the readability and quality of markdown content", long_about = None)]
struct Args {
    /// Markdown file to analyze, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,

    /// Reading speed for the time estimate, in words per minute
    #[arg(long, default_value = "200", value_name = "NUM")]
    wpm: usize,

    /// Word count above which content counts as long-form
    #[arg(long, default_value = "800", value_name = "NUM")]
    long_form_words: usize,

    /// Word count below which expansion is suggested
    #[arg(long, default_value = "500", value_name = "NUM")]
    min_words: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Print a styled banner for verbose mode
fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Claritas".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Score the readability and quality of markdown content".dimmed());
    eprintln!();
}

/// Print a styled step message
fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Format file size for display
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Print the score summary shown in verbose mode
fn print_metrics(quality: &ContentQuality) {
    eprintln!(
        "  {} {}",
        "Score:".dimmed(),
        format!("{}/100", quality.readability_score).bright_white()
    );
    eprintln!(
        "  {} {}",
        "Words:".dimmed(),
        quality.word_count.to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Sentences:".dimmed(),
        quality.sentence_count.to_string().bright_white()
    );
    eprintln!();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let (markdown, source) = if args.input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading from stdin");
        }
        let content = read_stdin().context("Failed to read from stdin")?;
        (content, None)
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        let content = read_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?;
        (content, Some(args.input.clone()))
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(markdown.len()).bright_white());
        eprintln!();
        print_step(2, 3, "Analyzing content");
    }

    let config = AnalyzerConfig::builder()
        .words_per_minute(args.wpm)
        .long_form_words(args.long_form_words)
        .min_depth_words(args.min_words)
        .build();

    let quality = analyze_with_config(&markdown, &config);

    if args.verbose {
        print_metrics(&quality);
        print_step(3, 3, "Writing report");
        eprintln!(
            "  {} {}",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
        eprintln!();
    }

    let report = match args.format {
        OutputFormat::Text => {
            let config = TextConfig { source: source.clone(), ..Default::default() };
            convert_to_text(&quality, &config)
        }
        OutputFormat::Json => {
            let config = JsonConfig { source: source.clone(), pretty: args.pretty };
            convert_to_json(&quality, &config).context("Failed to render JSON report")?
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, report).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Report written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", report);
        }
    }

    Ok(())
}
