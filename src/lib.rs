//! trackerscript
//!
//! Loader for ObjectTracker directive scripts: a flat list of `setcam`,
//! `setpar` and `serout` lines that configure the camera, the color tracker
//! and the serial-attached servo controller. The library turns script text
//! into a typed [`Script`]; applying it is left to the host.

pub mod cli;
pub mod error;
pub mod parser;
pub mod script_file;
pub mod types;

// Re-export main types for convenience
pub use error::{ParseError, ScriptError};
pub use parser::parse;
pub use script_file::{export_json, load_from_file, save_to_file};
pub use types::{Command, Directive, Range, Script, Value};
