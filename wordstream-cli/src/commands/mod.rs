//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod instances;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text files into POS-tagged word tokens
    Segment(segment::SegmentArgs),

    /// Read a pre-segmented file as unlabeled instances
    Instances(instances::InstancesArgs),

    /// Validate a lexicon or configuration file
    Validate(validate::ValidateArgs),

    /// Generate a configuration or lexicon template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List part-of-speech tags of the embedded lexicon
    Tags,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Instances(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in crate::output::OutputFormat::ALL {
                    println!("  {:<10} {}", format.as_str(), format.description());
                }
            }
            ListCommands::Tags => {
                let lexicon = wordstream_core::Lexicon::embedded()?;
                let fallback = lexicon.fallback_tags();
                println!("Tags in lexicon '{}':", lexicon.name());
                for tag in lexicon.pos_tags() {
                    println!("  {tag}");
                }
                println!("Fallback tags:");
                println!("  unknown      {}", fallback.unknown);
                println!("  numeral      {}", fallback.numeral);
                println!("  foreign      {}", fallback.foreign);
                println!("  punctuation  {}", fallback.punctuation);
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
