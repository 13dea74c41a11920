//! CLI application for RBC bank statement parsing.

mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use rbcx_core::convert::DefaultConverter;
use rbcx_core::{ParseResult, RbcxConfig, RbcxError, StatementParser};

use output::{OutputFormat, format_result};

/// RBC statement parser - Extract transactions from RBC bank statements
#[derive(Parser)]
#[command(name = "rbcx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Statement document (PDF, or layout XML)
    input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let Some(input) = cli.input.as_deref() else {
        println!("Usage: rbcx <pdf_path>");
        return Ok(ExitCode::FAILURE);
    };

    let result = match load_config(cli.config.as_deref()) {
        Ok(config) => {
            let converter = DefaultConverter::new(&config.converter);
            StatementParser::new(converter).with_config(config).parse(input)
        }
        Err(e) => ParseResult::from_error(input, &e),
    };

    let rendered = format_result(&result, cli.format)?;

    if let Some(output_path) = &cli.output {
        if let Err(e) = fs::write(output_path, &rendered) {
            let err = RbcxError::Output(format!("{}: {}", output_path.display(), e));
            println!("{}", format_result(&ParseResult::from_error(input, &err), cli.format)?);
            return Ok(ExitCode::FAILURE);
        }
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", rendered);
    }

    if result.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn load_config(path: Option<&Path>) -> Result<RbcxConfig, RbcxError> {
    match path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            RbcxConfig::from_file(path)
                .map_err(|e| RbcxError::Config(format!("{}: {}", path.display(), e)))
        }
        None => Ok(RbcxConfig::default()),
    }
}
