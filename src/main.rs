use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use kbcheck::validation::KnowledgeBasePaths;

mod commands;

use commands::{ListType, OutputFormat, list_command, validate_command};

#[derive(Parser)]
#[command(
    name = "kbcheck",
    about = "Checks an antibody knowledge-base roadmap and its supporting material for consistency",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the roadmap, the roster and the supporting material
    Validate {
        /// JSON configuration listing required/optional columns and valid values
        config: PathBuf,

        /// Roadmap CSV file
        roadmap: PathBuf,

        /// Root directory of the supporting material
        evidence_root: PathBuf,

        /// Release metadata JSON with the creators roster
        roster: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List groups or the supporting material files the roadmap refers to
    List {
        #[arg(value_enum)]
        list_type: ListType,

        /// Roadmap CSV file
        roadmap: PathBuf,

        /// Root directory of the supporting material
        #[arg(short, long, default_value = "supporting_material")]
        evidence_root: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    init_diagnostics()?;

    match cli.command {
        Commands::Validate {
            config,
            roadmap,
            evidence_root,
            roster,
            format,
        } => {
            let paths = KnowledgeBasePaths {
                config,
                roadmap,
                evidence_root,
                roster,
            };
            validate_command(&paths, format)
        }
        Commands::List {
            list_type,
            roadmap,
            evidence_root,
        } => {
            list_command(list_type, &roadmap, &evidence_root)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Diagnostics are printed without line wrapping
fn init_diagnostics() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().wrap_lines(false).build())
    }))?;
    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("kbcheck=warn"),
        1 => EnvFilter::new("kbcheck=info"),
        _ => EnvFilter::new("kbcheck=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
