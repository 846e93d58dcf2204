//! Error handling module for trackerscript
//!
//! Provides the loader's error type plus the crate-level error used by the
//! file helpers, both built on thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// A directive script was rejected.
///
/// Every variant carries the 1-based line number and the offending line so
/// the host can surface an actionable message. Parsing is fail-fast: the
/// first bad line aborts the whole script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line did not split into exactly `command name value`
    #[error("line {line}: expected 3 fields (command name value), found {fields}: `{text}`")]
    MalformedLine {
        line: usize,
        text: String,
        fields: usize,
    },

    /// First token is not `setcam`, `setpar` or `serout`
    #[error("line {line}: unknown command '{command}': `{text}`")]
    UnknownCommand {
        line: usize,
        text: String,
        command: String,
    },

    /// A `lo...hi` value with a bound that is not a signed integer
    #[error("line {line}: invalid range bound '{bound}': `{text}`")]
    InvalidRangeBound {
        line: usize,
        text: String,
        bound: String,
    },
}

impl ParseError {
    /// 1-based line number of the offending line
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line, .. }
            | Self::UnknownCommand { line, .. }
            | Self::InvalidRangeBound { line, .. } => *line,
        }
    }

    /// Offending line exactly as written, surrounding whitespace included
    pub fn text(&self) -> &str {
        match self {
            Self::MalformedLine { text, .. }
            | Self::UnknownCommand { text, .. }
            | Self::InvalidRangeBound { text, .. } => text,
        }
    }
}

/// Errors from loading, saving or exporting script files
#[derive(Error, Debug)]
pub enum ScriptError {
    /// IO errors (reading or writing script files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but its contents did not parse
    #[error("{}: {error}", .path.display())]
    Parse { path: PathBuf, error: ParseError },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScriptError {
    /// Wrap a parse failure with the file it came from
    pub fn parse(path: impl Into<PathBuf>, error: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            error,
        }
    }

    /// The underlying parse error, if this is one
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Result type alias for file-level script operations
pub type Result<T> = std::result::Result<T, ScriptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::MalformedLine {
            line: 4,
            text: "setcam autowb".to_string(),
            fields: 2,
        };
        assert_eq!(
            err.to_string(),
            "line 4: expected 3 fields (command name value), found 2: `setcam autowb`"
        );

        let err = ParseError::UnknownCommand {
            line: 1,
            text: "setfoo x 1".to_string(),
            command: "setfoo".to_string(),
        };
        assert_eq!(err.to_string(), "line 1: unknown command 'setfoo': `setfoo x 1`");
    }

    #[test]
    fn test_accessors() {
        let err = ParseError::InvalidRangeBound {
            line: 7,
            text: "setpar hrange 9...x".to_string(),
            bound: "x".to_string(),
        };
        assert_eq!(err.line(), 7);
        assert_eq!(err.text(), "setpar hrange 9...x");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScriptError = io_err.into();
        assert!(matches!(err, ScriptError::Io(_)));
        assert!(err.as_parse_error().is_none());
    }

    #[test]
    fn test_parse_error_wrapping() {
        let inner = ParseError::MalformedLine {
            line: 2,
            text: "serout".to_string(),
            fields: 1,
        };
        let err = ScriptError::parse("/tmp/script.cfg", inner.clone());
        assert_eq!(err.as_parse_error(), Some(&inner));
        assert!(err.to_string().starts_with("/tmp/script.cfg: line 2:"));
    }
}
