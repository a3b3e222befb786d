//! Segment command implementation

use crate::commands::init_logging;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordstream_core::{
    segmenter, SegmentTagger, SourceConfig, TextSentenceSource, WordStreamConfig, WordToken,
    WordTokenFilter,
};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from configuration, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lexicon file, overrides the configuration
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Segment files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel mode (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Tokens of one input file
#[derive(Debug)]
pub struct SegmentedDocument {
    /// Display name of the file
    pub name: String,
    /// Word tokens in stream order
    pub tokens: Vec<WordToken>,
}

/// Segment a document into word tokens
pub fn segment_text(
    text: &str,
    source_config: &SourceConfig,
    segmenter: Arc<dyn SegmentTagger>,
) -> wordstream_core::Result<Vec<WordToken>> {
    let source = TextSentenceSource::with_config(text, source_config);
    WordTokenFilter::new(source, segmenter).collect()
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting word segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let format = self.resolve_format(&config)?;
        let segmenter = segmenter::from_config(&config.segmenter)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Segmenting {} file(s)", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let documents = if self.parallel && files.len() > 1 {
            self.segment_parallel(&files, &config.source, &segmenter, &progress)?
        } else {
            files
                .iter()
                .map(|path| {
                    let document = segment_file(path, &config.source, &segmenter)?;
                    progress.file_completed(&document.name);
                    Ok(document)
                })
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        for document in &documents {
            formatter.begin_document(&document.name)?;
            for token in &document.tokens {
                formatter.format_token(token)?;
            }
        }
        formatter.finish()?;

        log::info!(
            "Emitted {} tokens",
            documents.iter().map(|d| d.tokens.len()).sum::<usize>()
        );
        Ok(())
    }

    fn load_config(&self) -> Result<WordStreamConfig> {
        let mut config = match &self.config {
            Some(path) => WordStreamConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
            None => WordStreamConfig::default(),
        };
        if let Some(lexicon) = &self.lexicon {
            config.segmenter.lexicon = Some(lexicon.clone());
        }
        Ok(config)
    }

    fn resolve_format(&self, config: &WordStreamConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
                .into()
            }),
        }
    }

    fn segment_parallel(
        &self,
        files: &[PathBuf],
        source_config: &SourceConfig,
        segmenter: &Arc<dyn SegmentTagger>,
        progress: &ProgressReporter,
    ) -> Result<Vec<SegmentedDocument>> {
        let threads = self.threads.unwrap_or_else(num_cpus::get);
        log::debug!("Using {threads} worker threads");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let document = segment_file(path, source_config, segmenter)?;
                    progress.file_completed(&document.name);
                    Ok(document)
                })
                .collect()
        })
    }
}

fn segment_file(
    path: &Path,
    source_config: &SourceConfig,
    segmenter: &Arc<dyn SegmentTagger>,
) -> Result<SegmentedDocument> {
    log::debug!(
        "Reading {} ({} bytes)",
        path.display(),
        FileReader::file_size(path)?
    );
    let text = FileReader::read_text(path)?;
    let tokens = segment_text(&text, source_config, Arc::clone(segmenter)).map_err(|source| {
        CliError::ProcessingError {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(SegmentedDocument {
        name: path.display().to_string(),
        tokens,
    })
}
