//! Error types.
//!
//! Input problems ([`ParseError`], [`CatalogError`]) are kept apart from
//! internal invariant breaches ([`PlanError`]); [`Error`] wraps all of them
//! for callers that drive the whole pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::models::{LoadId, Violation};

/// A catalog could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two loads share the same ID.
    DuplicateId(LoadId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateId(id) => write!(f, "duplicate load id {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// A planner parameter is unusable.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The value is NaN or infinite.
    NonFinite {
        /// Parameter name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// What was wrong with a problem-file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Fewer than three whitespace-separated fields.
    MissingField,
    /// More than three whitespace-separated fields.
    ExtraField,
    /// The load ID is not a non-negative integer.
    InvalidId(String),
    /// A point is not of the form `(x,y)` with real coordinates.
    InvalidPoint(String),
    /// The catalog rejected the load.
    Catalog(CatalogError),
}

/// A malformed problem-file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// The failure.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a parse error for a line.
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::MissingField => {
                write!(f, "expected `<id> (<x>,<y>) (<x>,<y>)`, too few fields")
            }
            ParseErrorKind::ExtraField => {
                write!(f, "expected `<id> (<x>,<y>) (<x>,<y>)`, too many fields")
            }
            ParseErrorKind::InvalidId(raw) => write!(f, "invalid load id `{raw}`"),
            ParseErrorKind::InvalidPoint(raw) => write!(f, "invalid point `{raw}`"),
            ParseErrorKind::Catalog(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Route construction produced a plan that breaks its own invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A multi-load route exceeds the distance cap.
    CapExceeded(Violation),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::CapExceeded(v) => write!(f, "internal invariant violated: {v}"),
        }
    }
}

impl std::error::Error for PlanError {}

/// Any failure between reading a problem file and producing a plan.
#[derive(Debug)]
pub enum Error {
    /// The file could not be read.
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A configuration file is not valid JSON for [`PlannerConfig`](crate::config::PlannerConfig).
    Config {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
    /// A planner parameter is out of range.
    Parameter(ConfigError),
    /// The problem file is malformed.
    Parse(ParseError),
    /// The planner broke an invariant.
    Plan(PlanError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, .. } => write!(f, "failed to read {}", path.display()),
            Error::Config { path, .. } => write!(f, "invalid config {}", path.display()),
            Error::Parameter(e) => write!(f, "invalid planner parameter: {e}"),
            Error::Parse(e) => write!(f, "malformed problem: {e}"),
            Error::Plan(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Config { source, .. } => Some(source),
            Error::Parameter(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Plan(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Parameter(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<PlanError> for Error {
    fn from(e: PlanError) -> Self {
        Error::Plan(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let e = ParseError::new(4, ParseErrorKind::InvalidPoint("(1,x)".into()));
        assert_eq!(e.to_string(), "line 4: invalid point `(1,x)`");
    }

    #[test]
    fn test_duplicate_display() {
        let kind = ParseErrorKind::Catalog(CatalogError::DuplicateId(9));
        let e = ParseError::new(3, kind);
        assert_eq!(e.to_string(), "line 3: duplicate load id 9");
    }

    #[test]
    fn test_config_error_display() {
        let e = Error::from(ConfigError::NonFinite {
            field: "depot_weight",
            value: f64::NAN,
        });
        assert_eq!(
            e.to_string(),
            "invalid planner parameter: depot_weight must be finite, got NaN"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let inner = ParseError::new(2, ParseErrorKind::MissingField);
        let e = Error::from(inner.clone());
        let source = std::error::Error::source(&e).expect("has source");
        assert_eq!(source.to_string(), inner.to_string());
    }
}
