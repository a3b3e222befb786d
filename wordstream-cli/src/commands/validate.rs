//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordstream_core::{Lexicon, WordStreamConfig};

/// Arguments for the validate command
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ValidateArgs {
    /// Path to a lexicon file to validate
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Path to a configuration file to validate
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(path) = &self.lexicon {
            println!("Validating lexicon: {}", path.display());
            return match Lexicon::from_file(path) {
                Ok(lexicon) => {
                    println!("✓ Lexicon is valid!");
                    println!("  Name: {}", lexicon.name());
                    println!("  Words: {}", lexicon.len());
                    println!("  Tags: {}", lexicon.pos_tags().join(", "));
                    Ok(())
                }
                Err(e) => {
                    println!("✗ Lexicon is invalid!");
                    println!("  Error: {e}");
                    Err(anyhow::anyhow!("Validation failed: {}", e))
                }
            };
        }

        if let Some(path) = &self.config {
            println!("Validating configuration: {}", path.display());
            return match WordStreamConfig::from_file(path) {
                Ok(config) => {
                    println!("✓ Configuration is valid!");
                    match &config.segmenter.lexicon {
                        Some(lexicon) => println!("  Lexicon: {}", lexicon.display()),
                        None => println!("  Lexicon: embedded"),
                    }
                    println!("  Output format: {}", config.output.default_format);
                    Ok(())
                }
                Err(e) => {
                    println!("✗ Configuration is invalid!");
                    println!("  Error: {e}");
                    Err(anyhow::anyhow!("Validation failed: {}", e))
                }
            };
        }

        anyhow::bail!("Nothing to validate: pass --lexicon or --config")
    }
}
