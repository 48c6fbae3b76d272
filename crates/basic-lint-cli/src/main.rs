//! basic-lint CLI tool.
//!
//! Usage:
//! ```bash
//! basic-lint [OPTIONS] [INPUT]...
//! basic-lint --show-common
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

const EXAMPLES: &str = "\
Examples:
  Current folder with common ignores
    basic-lint . -c
  scripts folder with common ignores, also ignoring anything ending in .txt
    basic-lint scripts -c -i .txt
  ignore directories whose name ends with build, but not files
    basic-lint . -i build/
  ignore directories named build
    basic-lint . -i /build/
  fix reported problems where possible
    basic-lint . -f
";

/// Line ending, trailing whitespace and trailing newline linter for text files
#[derive(Parser)]
#[command(name = "basic-lint")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
struct Cli {
    /// Files or root directories to lint
    input: Vec<String>,

    /// Add a suffix to ignore
    #[arg(short, long = "ignore", value_name = "SUFFIX")]
    ignore: Vec<String>,

    /// Remove a suffix from the (common) ignore list
    #[arg(short, long = "add", value_name = "SUFFIX")]
    add: Vec<String>,

    /// Enforce windows line endings instead of unix for the suffix
    #[arg(short, long = "windows", value_name = "SUFFIX")]
    windows: Vec<String>,

    /// Add a TOML profile (may be repeated)
    #[arg(short, long = "profile", value_name = "FILE")]
    profile: Vec<PathBuf>,

    /// Append the common profile
    #[arg(short, long)]
    common: bool,

    /// Skip files that are not valid UTF-8 instead of reporting them
    #[arg(short, long = "binary-ignore")]
    binary_ignore: bool,

    /// Fix problems in place where possible
    #[arg(short, long)]
    fix: bool,

    /// Print every processed path and detail info
    #[arg(short, long)]
    verbose: bool,

    /// Print the common profile as TOML and exit
    #[arg(long)]
    show_common: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per file, indented block for several violations.
    #[default]
    Text,
    /// JSON output.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_common {
        return commands::show_common::run();
    }

    if cli.input.is_empty() {
        anyhow::bail!("Need at least 1 input file or directory");
    }

    let options = commands::lint::LintOptions {
        ignore: cli.ignore,
        add: cli.add,
        windows: cli.windows,
        common: cli.common,
        skip_binary: cli.binary_ignore,
        fix: cli.fix,
    };
    let profiles = config_resolver::resolve(&std::env::current_dir()?, &cli.profile);

    let clean = commands::lint::run(&cli.input, &options, &profiles, cli.format)?;
    if !clean {
        std::process::exit(1);
    }

    Ok(())
}
