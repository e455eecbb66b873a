//! celfix CLI
//!
//! Renders protojson parse results into golden fixtures and compares
//! renderings across parser implementations.

use std::path::PathBuf;
use std::process::ExitCode;

use celfix::commands::{
    compare_files, render_file, render_macros_file, render_options, run_fixtures, Comparison,
};
use celfix::fixture::FixtureConfig;
use celfix::CommandError;
use clap::{Parser, Subcommand};

/// Golden fixtures for parsed expressions.
#[derive(Parser)]
#[command(name = "celfix", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every test of a corpus into fixture files.
    Fixtures {
        /// JSON array of test files with protojson parse results.
        corpus: PathBuf,

        /// Write fixtures here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use the tag layout and names of existing golden files.
        #[arg(long)]
        golden: bool,

        /// Render tests one at a time.
        #[arg(long)]
        no_parallel: bool,

        /// Only render tests whose name contains this text.
        #[arg(long)]
        filter: Option<String>,
    },

    /// Print the adorned rendering of one parse result.
    Render {
        /// Protojson `ParsedExpr` or `CheckedExpr`.
        parsed: PathBuf,

        /// Tag nodes with line and column instead of kind.
        #[arg(long)]
        locations: bool,

        #[arg(long)]
        golden: bool,
    },

    /// Print the reconstructed macro calls of one parse result.
    Macros {
        parsed: PathBuf,

        #[arg(long)]
        golden: bool,
    },

    /// Compare two renderings, ignoring id numbering and whitespace.
    Compare { expected: PathBuf, actual: PathBuf },
}

fn run(command: Command) -> Result<ExitCode, CommandError> {
    match command {
        Command::Fixtures {
            corpus,
            output,
            golden,
            no_parallel,
            filter,
        } => {
            let config = FixtureConfig {
                options: render_options(golden),
                parallel: !no_parallel,
                filter,
            };
            run_fixtures(&corpus, output.as_deref(), &config)?;
        }
        Command::Render {
            parsed,
            locations,
            golden,
        } => {
            println!("{}", render_file(&parsed, locations, &render_options(golden))?);
        }
        Command::Macros { parsed, golden } => {
            println!("{}", render_macros_file(&parsed, &render_options(golden))?);
        }
        Command::Compare { expected, actual } => match compare_files(&expected, &actual)? {
            Comparison::Match => println!("renderings match"),
            Comparison::Mismatch { offset } => {
                eprintln!("renderings differ at offset {offset}");
                return Ok(ExitCode::FAILURE);
            }
        },
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    celfix::init_tracing();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
