use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "titlescan")]
#[command(author, version, about = "Read disc scan reports and list their titles")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the report comes from and how it was produced.
#[derive(Args)]
pub struct ReportArgs {
    /// Scan report to read ("-" for stdin)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Skip log lines before the first title
    #[arg(long)]
    pub skip_preamble: bool,

    /// The scan ran without angle detection
    #[arg(long)]
    pub no_angles: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a scan report and list its titles
    Parse {
        #[command(flatten)]
        report: ReportArgs,

        /// Only list chapter and track counts
        #[arg(long)]
        summary: bool,
    },

    /// Parse a scan report and report implausible titles
    Check {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Validate configuration file
    ValidateConfig {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
