//! Instances command implementation

use crate::input::FileReader;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordstream_core::{InstanceReader, ListReader};

/// Arguments for the instances command
#[derive(Debug, Args)]
pub struct InstancesArgs {
    /// Pre-segmented file: one sentence per line, words separated by spaces
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: InstanceFormat,
}

/// Instance output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InstanceFormat {
    /// Index and space-joined words per line
    Text,
    /// One JSON object per line
    Json,
}

impl InstancesArgs {
    /// Execute the instances command
    pub fn execute(&self) -> Result<()> {
        let text = FileReader::read_text(&self.input)?;
        let mut reader = ListReader::from_lines(&text);
        log::info!(
            "Read {} instances from {}",
            reader.len(),
            self.input.display()
        );

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                write_instances(&mut reader, BufWriter::new(file), self.format)
            }
            None => write_instances(&mut reader, io::stdout().lock(), self.format),
        }
    }
}

/// Drain a reader into `writer`
pub fn write_instances<R: InstanceReader, W: Write>(
    reader: &mut R,
    mut writer: W,
    format: InstanceFormat,
) -> Result<()> {
    let mut index = 0;
    while reader.has_next() {
        let instance = reader.next_instance();
        match format {
            InstanceFormat::Text => writeln!(writer, "{index}\t{}", instance.data.join(" "))?,
            InstanceFormat::Json => {
                serde_json::to_writer(&mut writer, &instance)?;
                writeln!(writer)?;
            }
        }
        index += 1;
    }
    writer.flush()?;
    Ok(())
}
