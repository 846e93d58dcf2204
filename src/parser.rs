//! Directive loader: script text in, typed [`Script`] out.
//!
//! Grammar, one directive per line:
//!
//! ```text
//! # comment
//! <command> <name> <value>
//! ```
//!
//! `<command>` is `setcam`, `setpar` or `serout` (case-sensitive). `<value>`
//! is an integer, an inclusive range `lo...hi`, or an opaque token. Names are
//! not checked against any vocabulary; `serout` names in particular are
//! downstream controller commands and are passed through untouched.
//!
//! Parsing is pure and fail-fast: the first bad line rejects the whole script
//! and no partial result is returned.

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::types::{Command, Directive, Range, Script, Value};

const RANGE_SEPARATOR: &str = "...";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse a whole script.
pub fn parse(text: &str) -> Result<Script, ParseError> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut directives = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        if let Some(directive) = parse_line(raw, index + 1)? {
            trace!(line = directive.line, %directive, "parsed directive");
            directives.push(directive);
        }
    }

    debug!(directives = directives.len(), "parsed tracker script");
    Ok(Script::new(directives))
}

/// Parse one physical line; `Ok(None)` for comments and blank lines.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<Directive>, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    let [command, name, value] = fields[..] else {
        return Err(ParseError::MalformedLine {
            line,
            text: raw.to_string(),
            fields: fields.len(),
        });
    };

    let command: Command = command.parse().map_err(|_| ParseError::UnknownCommand {
        line,
        text: raw.to_string(),
        command: command.to_string(),
    })?;

    let value = parse_value(value).map_err(|bound| ParseError::InvalidRangeBound {
        line,
        text: raw.to_string(),
        bound,
    })?;

    if let Value::Range(range) = &value {
        if !range.is_ordered() {
            debug!(line, name, %range, "accepting reversed range");
        }
    }

    Ok(Some(Directive::new(command, name, value, line)))
}

/// Classify a value token. The error is the offending range bound.
fn parse_value(token: &str) -> Result<Value, String> {
    if let Some((low, high)) = token.split_once(RANGE_SEPARATOR) {
        let low = parse_bound(low)?;
        let high = parse_bound(high)?;
        return Ok(Value::Range(Range::new(low, high)));
    }

    match token.parse::<i64>() {
        Ok(v) => Ok(Value::Int(v)),
        Err(_) => Ok(Value::Token(token.to_string())),
    }
}

fn parse_bound(bound: &str) -> Result<i64, String> {
    bound.parse::<i64>().map_err(|_| bound.to_string())
}
