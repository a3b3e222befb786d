//! Configuration types
//!
//! Configuration is stored as TOML. Every section has defaults, so an empty
//! file is a valid configuration.

use crate::error::{Result, StreamError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordStreamConfig {
    /// Segmentation service settings
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// Sentence splitting settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Segmentation service settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Lexicon file; the embedded lexicon is used when absent
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
}

/// Sentence splitting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Characters that end a sentence
    #[serde(default = "default_terminators")]
    pub terminators: Vec<char>,

    /// Treat a line break as a sentence boundary
    #[serde(default = "default_true")]
    pub split_on_newline: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
            split_on_newline: true,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Pretty print JSON output
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            pretty_json: true,
        }
    }
}

fn default_terminators() -> Vec<char> {
    vec!['。', '！', '？', '.', '!', '?']
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl WordStreamConfig {
    /// Parse a configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| StreamError::Config(format!("{}: {e}", path.display())))
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StreamError::Config(e.to_string()))
    }

    /// Check semantic constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.source.terminators.is_empty() && !self.source.split_on_newline {
            return Err(StreamError::Config(
                "no sentence terminators and newline splitting disabled".to_string(),
            ));
        }
        if let Some(ch) = self.source.terminators.iter().find(|c| c.is_whitespace()) {
            return Err(StreamError::Config(format!(
                "whitespace terminator {ch:?} is not allowed"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = WordStreamConfig::from_toml_str("").unwrap();
        assert_eq!(config, WordStreamConfig::default());
        assert!(config.source.terminators.contains(&'。'));
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_partial_config() {
        let config = WordStreamConfig::from_toml_str(
            r#"
[segmenter]
lexicon = "words.toml"

[source]
terminators = ["."]
"#,
        )
        .unwrap();

        assert_eq!(config.segmenter.lexicon, Some(PathBuf::from("words.toml")));
        assert_eq!(config.source.terminators, vec!['.']);
        assert!(config.source.split_on_newline);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = WordStreamConfig::from_toml_str(
            r#"
[source]
terminators = []
split_on_newline = false
"#,
        );
        assert!(matches!(result, Err(StreamError::Config(_))));

        let result = WordStreamConfig::from_toml_str("[source]\nterminators = [\" \"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wordstream.toml");

        let mut config = WordStreamConfig::default();
        config.output.pretty_json = false;
        fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        let loaded = WordStreamConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let result = WordStreamConfig::from_file(Path::new("/nonexistent/wordstream.toml"));
        assert!(matches!(result, Err(StreamError::Io(_))));
    }
}
