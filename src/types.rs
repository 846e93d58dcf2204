//! Typed directive model for tracker scripts
//!
//! A script is a flat, ordered list of `command name value` directives. The
//! types here only describe what was written; applying a directive to the
//! camera, the tracker or the serial link is up to the host.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Directive command, the first token of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    /// Camera control (exposure, white balance, gain)
    Setcam,
    /// Tracker parameter (color ranges, log and serial sinks)
    Setpar,
    /// Pass-through command forwarded verbatim to the serial controller
    Serout,
}

impl Command {
    /// Whether the host forwards this directive without interpreting it
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Self::Serout)
    }
}

/// Inclusive integer interval written as `low...high`.
///
/// Bounds are kept exactly as written. A reversed range (`low > high`) is
/// accepted by the loader; use [`Range::is_ordered`] to reject it downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub low: i64,
    pub high: i64,
}

impl Range {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// True when `low <= high`
    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }

    /// Inclusive membership test; always false for a reversed range
    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...{}", self.low, self.high)
    }
}

/// Directive value, third token of a line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    Int(i64),
    Range(Range),
    /// Anything that is neither an integer nor a range (`None`, `Hard`, ...)
    Token(String),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<Range> {
        match self {
            Self::Range(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Token(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Range(r) => write!(f, "{}", r),
            Self::Token(t) => f.write_str(t),
        }
    }
}

/// One parsed line of a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub command: Command,
    /// Setting name; for `serout` this is the downstream command word
    pub name: String,
    pub value: Value,
    /// 1-based source line
    pub line: usize,
}

impl Directive {
    pub fn new(command: Command, name: impl Into<String>, value: Value, line: usize) -> Self {
        Self {
            command,
            name: name.into(),
            value,
            line,
        }
    }

    /// Same command, name and value, ignoring where it was written
    pub fn same_setting(&self, other: &Directive) -> bool {
        self.command == other.command && self.name == other.name && self.value == other.value
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.command, self.name, self.value)
    }
}

/// Ordered directives of one script file.
///
/// File order is preserved and duplicates are kept; later entries override
/// earlier ones only if the consumer chooses to, see [`Script::effective`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    directives: Vec<Directive>,
}

impl Script {
    pub fn new(directives: Vec<Directive>) -> Self {
        Self { directives }
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.directives.iter()
    }

    /// Directives of one command, in file order
    pub fn with_command(&self, command: Command) -> impl Iterator<Item = &Directive> {
        self.directives.iter().filter(move |d| d.command == command)
    }

    /// Last directive for `command name`, i.e. the one that wins when the
    /// host applies the script top to bottom
    pub fn effective(&self, command: Command, name: &str) -> Option<&Directive> {
        self.directives
            .iter()
            .rev()
            .find(|d| d.command == command && d.name == name)
    }

    /// Pretty JSON for hosts that prefer structured input
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for directive in &self.directives {
            writeln!(f, "{}", directive)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.iter()
    }
}

impl IntoIterator for Script {
    type Item = Directive;
    type IntoIter = std::vec::IntoIter<Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.into_iter()
    }
}
