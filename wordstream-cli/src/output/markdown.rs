//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordstream_core::WordToken;

/// Markdown formatter - outputs a token table per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    token_count: usize,
    table_open: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            token_count: 0,
            table_open: false,
        }
    }

    fn write_table_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| Word | POS | Start | End |")?;
        writeln!(self.writer, "|------|-----|-------|-----|")?;
        self.table_open = true;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        if self.table_open {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        self.write_table_header()
    }

    fn format_token(&mut self, token: &WordToken) -> Result<()> {
        if !self.table_open {
            self.write_table_header()?;
        }
        self.token_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            token.text.replace('|', "\\|"),
            token.pos,
            token.start,
            token.end
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total tokens: {}*", self.token_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
