use anyhow::Result;
use colored::Colorize;
use kbcheck::error_utils::format_error_path;
use kbcheck::validation::{KnowledgeBasePaths, ValidationReport, validate_knowledge_base};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn validate_command(paths: &KnowledgeBasePaths, format: OutputFormat) -> Result<ExitCode> {
    tracing::info!(
        "Validating roadmap {} against {}",
        format_error_path(&paths.roadmap),
        format_error_path(&paths.config)
    );

    let report = match validate_knowledge_base(paths) {
        Ok(report) => report,
        Err(error) => {
            // Configuration and roster problems end the run before any checks
            eprintln!("{:?}", miette::Report::new(error));
            return Ok(ExitCode::FAILURE);
        }
    };

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.summary())?),
    }

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_text(report: &ValidationReport) {
    for violation in report.violations() {
        eprintln!("{:?}", miette::Report::new(violation.clone()));
    }

    if !report.orphans().is_empty() {
        eprintln!(
            "{}",
            "The following supporting material files are not referenced in the roadmap:".yellow()
        );
        for orphan in report.orphans() {
            eprintln!("  {}", format_error_path(orphan).yellow());
        }
    }

    if report.is_valid() {
        println!(
            "{}",
            format!(
                "✅ All validations passed! ({} supporting material file(s) checked)",
                report.referenced().len()
            )
            .green()
        );
    } else {
        eprintln!(
            "{}",
            format!("❌ Found {} problem(s)", report.violations().len()).red()
        );
    }
}
