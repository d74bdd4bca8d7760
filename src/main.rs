mod cli;

use titlescan::config::{self, Config, OutputFormat};
use titlescan::{input, report};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ReportArgs};
use std::io::Write;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            // Verbose mode: every skipped line and parsed title
            "titlescan=debug,titlescan_parser=trace".to_string()
        } else {
            // Normal mode: malformed fields and skipped blocks only
            "titlescan=info,titlescan_parser=warn".to_string()
        }
    });

    // Logs go to stderr, stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse { report, summary } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            parse_report(&report, config, summary)
        }
        Commands::Check { report } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            check_report(&report, config)
        }
        Commands::ValidateConfig {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("titlescan {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Apply command-line overrides on top of the loaded config.
fn apply_overrides(config: &mut Config, args: &ReportArgs) {
    if args.skip_preamble {
        config.parser.skip_preamble = true;
    }
    if args.no_angles {
        config.parser.angle_detection = false;
    }
    if args.json {
        config.output.format = OutputFormat::Json;
    }
}

fn parse_report(args: &ReportArgs, mut config: Config, summary: bool) -> Result<()> {
    apply_overrides(&mut config, args);
    if summary {
        config.output.tracks = false;
    }

    let parser = titlescan_parser::Parser::new(config.parser.clone());
    let titles = input::read_titles(&args.input, &parser)?;

    let mut stdout = std::io::stdout().lock();
    match config.output.format {
        OutputFormat::Json => {
            let json = report::titles_json(&titles, config.output.pretty)?;
            writeln!(stdout, "{}", json)?;
        }
        OutputFormat::Text => {
            report::write_titles(&mut stdout, &titles, &config.output)?;
            if let Some(title) = titlescan_parser::default_title(&titles) {
                writeln!(stdout, "\nDefault title: {}", title)?;
            }
        }
    }

    Ok(())
}

fn check_report(args: &ReportArgs, mut config: Config) -> Result<()> {
    apply_overrides(&mut config, args);

    let parser = titlescan_parser::Parser::new(config.parser.clone());
    let titles = input::read_titles(&args.input, &parser)?;

    let issues: Vec<_> = titlescan_parser::validate(&titles)
        .into_iter()
        .filter(|issue| config.check.reports(issue.code()))
        .collect();

    let mut stdout = std::io::stdout().lock();
    match config.output.format {
        OutputFormat::Json => {
            let json = report::check_json(&titles, &issues, config.output.pretty)?;
            writeln!(stdout, "{}", json)?;
        }
        OutputFormat::Text => {
            writeln!(stdout, "Checked {} title(s)", titles.len())?;
            report::write_issues(&mut stdout, &issues)?;
        }
    }
    stdout.flush().context("Failed to write output")?;

    if !issues.is_empty() {
        anyhow::bail!("{} issue(s) found", issues.len());
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_config(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            println!("Default config:");
            print_config(&Config::default());
        }
    }

    Ok(())
}

fn print_config(config: &Config) {
    println!("  Angle detection: {}", config.parser.angle_detection);
    println!("  Skip preamble: {}", config.parser.skip_preamble);
    println!("  Output format: {:?}", config.output.format);
    println!("  Ignored issues: {}", config.check.ignore.len());
}
