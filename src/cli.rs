use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::Command;

/// trackerscript - check and inspect ObjectTracker directive scripts
#[derive(Parser)]
#[command(name = "trackerscript")]
#[command(about = "Parse, validate and inspect setcam/setpar/serout tracker scripts")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a script file
    Check {
        /// Path to the script
        script: PathBuf,
    },
    /// Print the parsed script in canonical form
    Dump {
        /// Path to the script
        script: PathBuf,

        /// Emit JSON instead of script text
        #[arg(long)]
        json: bool,
    },
    /// Print the effective value of one setting (last directive wins)
    Get {
        /// Path to the script
        script: PathBuf,

        /// Directive command: setcam, setpar or serout
        command: Command,

        /// Setting name, e.g. hrange or PANGAIN
        name: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
