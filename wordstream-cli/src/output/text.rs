//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordstream_core::WordToken;

/// Plain text formatter - one tab-separated token per line
///
/// Documents after the first are separated by a blank line.
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_document(&mut self, _name: &str) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;
        Ok(())
    }

    fn format_token(&mut self, token: &WordToken) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            token.text, token.pos, token.start, token.end
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
