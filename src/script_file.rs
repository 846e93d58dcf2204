//! Script file handling for loading, saving and exporting tracker scripts.
//!
//! The loader in [`crate::parser`] never touches the filesystem; this module
//! is the host-side layer that reads a file and hands its text over.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, ScriptError};
use crate::parser;
use crate::types::Script;

/// Read and parse a script file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Script> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let script = parser::parse(&text).map_err(|e| ScriptError::parse(path, e))?;

    info!(path = %path.display(), directives = script.len(), "loaded tracker script");
    Ok(script)
}

/// Write the canonical text form of a script
pub fn save_to_file<P: AsRef<Path>>(script: &Script, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, script.to_string())?;

    info!(path = %path.display(), directives = script.len(), "saved tracker script");
    Ok(())
}

/// Write a script as pretty JSON
pub fn export_json<P: AsRef<Path>>(script: &Script, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = script.to_json_pretty()?;
    fs::write(path, json)?;

    info!(path = %path.display(), "exported tracker script as JSON");
    Ok(())
}
