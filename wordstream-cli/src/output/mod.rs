//! Output formatting module

use anyhow::Result;
use std::io::Write;
use wordstream_core::WordToken;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the tokens of a new document
    fn begin_document(&mut self, name: &str) -> Result<()>;

    /// Format and output a single token
    fn format_token(&mut self, token: &WordToken) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated word, tag and offsets, one token per line
    Text,
    /// JSON array of documents with their tokens
    Json,
    /// Markdown table per document
    Markdown,
}

impl OutputFormat {
    /// All formats
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Format name as used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Parse a format name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "word<TAB>pos<TAB>start<TAB>end per line",
            OutputFormat::Json => "JSON array of documents with their tokens",
            OutputFormat::Markdown => "Markdown table per document",
        }
    }
}

/// Create a formatter writing to `writer`
pub fn create_formatter<W: Write + Send + Sync + 'static>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
