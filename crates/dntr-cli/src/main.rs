use anyhow::{Context, Result};
use clap::Parser;
use dntr_runner::{match_tests, report, Orchestrator};
use dntr_sdk::DotnetHome;
use std::env;
use std::fs;
use std::path::PathBuf;

mod reporter;

/// .NET home used when neither the command line nor DOTNET_ROOT names one
const DEFAULT_DOTNET_HOME: &str = "/usr/lib64/dotnet";

/// Regression test harness for .NET Core distributions.
///
/// Searches a directory tree for C# files carrying a `<test>` metadata
/// header, keeps the ones the installed distribution can satisfy, then
/// compiles and executes each one in an isolated working directory and
/// writes a full report.
///
/// EXAMPLES:
///     dntr tests/                  Test the system .NET home
///     dntr tests/ /opt/dotnet      Test a specific distribution
///     dntr tests/ -v               Show failure output as tests finish
#[derive(Parser)]
#[command(name = "dntr")]
#[command(version)]
struct Cli {
    /// Directory searched recursively for *.cs test files
    test_root: PathBuf,

    /// .NET home directory to test (default: $DOTNET_ROOT, then /usr/lib64/dotnet)
    #[arg(env = "DOTNET_ROOT")]
    dotnet_home: Option<PathBuf>,

    /// Print command output for failing tests as they finish
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let home_path = cli
        .dotnet_home
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DOTNET_HOME));
    let home = DotnetHome::new(&home_path)
        .with_context(|| format!("cannot test {}", home_path.display()))?;

    let test_root = cli
        .test_root
        .canonicalize()
        .with_context(|| format!("bad file search root {}", cli.test_root.display()))?;

    let run_root = env::current_dir()
        .context("cannot determine current directory")?
        .join(format!("dntr.{}", chrono::Utc::now().timestamp_millis()));
    fs::create_dir_all(&run_root)
        .with_context(|| format!("cannot create working directory {}", run_root.display()))?;
    let report_file = run_root.join("report.txt");

    println!("Testing: {}", home.root().display());
    println!("Running tests at: {}", test_root.display());
    println!("Working directory: {}", run_root.display());
    println!("Full report at: {}", report_file.display());
    println!();

    let outcome = match_tests(&home, &test_root)?;
    reporter::print_skipped(&outcome.skipped);

    let console = reporter::ConsoleReporter::new(cli.verbose);
    let orchestrator = Orchestrator::new(&home, &run_root);
    let results = orchestrator.execute_all(outcome.tests, |result| console.print_result(result))?;

    console.print_summary(&results);

    fs::write(&report_file, report::generate(&home, &results))
        .with_context(|| format!("cannot write report to {}", report_file.display()))?;

    Ok(())
}
