//! trackerscript - command line checker for tracker directive scripts

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use trackerscript::cli::{Cli, Commands};
use trackerscript::{Command, load_from_file};

/// Initialize the logger; `--verbose` wins over RUST_LOG
fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed");

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("✗ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Check { script } => check(&script),
        Commands::Dump { script, json } => dump(&script, json),
        Commands::Get {
            script,
            command,
            name,
        } => get(&script, command, &name),
    }
}

fn check(path: &Path) -> Result<()> {
    info!("Validating script: {:?}", path);
    let script = load_from_file(path).context("Script validation failed")?;
    println!("✓ {}: {} directives", path.display(), script.len());
    Ok(())
}

fn dump(path: &Path, json: bool) -> Result<()> {
    let script = load_from_file(path).context("Failed to load script")?;
    if json {
        let out = script
            .to_json_pretty()
            .context("Failed to serialize script to JSON")?;
        println!("{}", out);
    } else {
        print!("{}", script);
    }
    Ok(())
}

fn get(path: &Path, command: Command, name: &str) -> Result<()> {
    let script = load_from_file(path).context("Failed to load script")?;
    let directive = script
        .effective(command, name)
        .with_context(|| format!("No '{} {}' directive in {}", command, name, path.display()))?;

    debug!(line = directive.line, "effective directive");
    println!("{}", directive.value);
    Ok(())
}
