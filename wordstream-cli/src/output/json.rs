//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordstream_core::WordToken;

/// JSON formatter - outputs documents and their tokens as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Source file name
    pub file: String,
    /// Word tokens in stream order
    pub tokens: Vec<WordToken>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        self.documents.push(DocumentData {
            file: name.to_string(),
            tokens: Vec::new(),
        });
        Ok(())
    }

    fn format_token(&mut self, token: &WordToken) -> Result<()> {
        if self.documents.is_empty() {
            self.begin_document("")?;
        }
        if let Some(document) = self.documents.last_mut() {
            document.tokens.push(token.clone());
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
