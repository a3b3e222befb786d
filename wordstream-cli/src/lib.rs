//! wordstream CLI library
//!
//! This library provides the command-line interface for segmenting text
//! into part-of-speech tagged word tokens.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
