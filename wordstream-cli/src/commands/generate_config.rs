//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use wordstream_core::WordStreamConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Generate a lexicon template instead of a configuration
    #[arg(long)]
    pub lexicon: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let (kind, template) = if self.lexicon {
            ("Lexicon", lexicon_template())
        } else {
            ("Configuration", config_template()?)
        };

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ {kind} template generated successfully!");
        println!("  Output file: {}", self.output.display());
        println!();
        println!("Validate it with:");
        let flag = if self.lexicon { "--lexicon" } else { "--config" };
        println!("   wordstream validate {flag} {}", self.output.display());

        Ok(())
    }
}

fn config_template() -> Result<String> {
    let body = WordStreamConfig::default().to_toml_string()?;
    Ok(format!(
        "# wordstream configuration\n\
         #\n\
         # [segmenter] lexicon = \"path/to/lexicon.toml\" replaces the embedded lexicon.\n\
         \n{body}"
    ))
}

fn lexicon_template() -> String {
    r#"# Lexicon for the wordstream dictionary segmenter
#
# Words are grouped by part-of-speech tag. A word may appear under one tag only.

[metadata]
name = "custom"
description = "Custom lexicon"

# Tags for words missing from the lexicon
[tags]
unknown = "X"
numeral = "NUM"
foreign = "X"
punctuation = "PUNCT"

[entries]
NOUN = ["语言", "文本"]
VERB = ["处理", "学习"]
# PROPN = ["北京大学"]
"#
    .to_string()
}
