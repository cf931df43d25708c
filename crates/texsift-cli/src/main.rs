use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use texsift_log::{Scanner, DEFAULT_CONTEXT_LINES};

#[derive(Parser)]
#[command(name = "texsift")]
#[command(about = "TexSift log triage tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a TeX log file and emit the report as JSON
    Parse {
        /// Path to the .log file
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Trailing context lines kept per message
        #[arg(long, default_value_t = DEFAULT_CONTEXT_LINES)]
        context: usize,
    },
    /// Scan a TeX log file and fail if it contains errors
    Check {
        /// Path to the .log file
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Also fail on warnings
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse { path, context } => {
            let content = fs::read_to_string(path)?;
            let report = Scanner::new().context_lines(*context).scan(&content);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { path, strict } => {
            let content = fs::read_to_string(path)?;
            let report = Scanner::new().scan(&content);
            println!(
                "errors: {}, warnings: {}, badboxes: {}, missing refs: {}",
                report.errors_count,
                report.warnings_count,
                report.badboxes_count,
                report.missing_refs.len()
            );
            let failed = report.has_errors || (*strict && report.has_warnings);
            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}
