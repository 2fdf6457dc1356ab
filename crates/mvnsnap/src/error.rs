//! Error types for mvnsnap

use std::fmt;
use thiserror::Error;

/// Position in the source document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in the source document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
///
/// Every kind is fatal; the parser never recovers or retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document does not begin with an `<?xml ...?>` declaration.
    MissingHeader,
    /// Content remains after the root value was fully parsed.
    TrailingInput,
    /// An attribute list does not match the `name="value"` pattern.
    MalformedAttribute,
    /// A close tag does not exactly match its open tag identifier.
    MismatchedCloseTag { tag: String },
    /// Content matches neither the open-tag nor the text rule.
    ///
    /// The text rule matches any (possibly empty) run of non-`<` bytes, so
    /// reaching this indicates a grammar inconsistency.
    UnparsableContent,
    /// The input is not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "missing xml declaration"),
            Self::TrailingInput => write!(f, "trailing content after root"),
            Self::MalformedAttribute => write!(f, "malformed attribute"),
            Self::MismatchedCloseTag { tag } => {
                write!(f, "missing close tag </{tag}>")
            }
            Self::UnparsableContent => write!(f, "unparsable content"),
            Self::InvalidUtf8 => write!(f, "invalid utf-8"),
        }
    }
}

/// Main error type for mvnsnap
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at a specific position
    pub fn at(kind: ErrorKind, offset: usize, line: u32, col: u32) -> Self {
        let pos = Pos::new(offset, line, col);
        Self::new(kind, Span::new(pos, pos))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.span.start, self.message)
    }
}

/// Result type alias for mvnsnap
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_display() {
        let pos = Pos::new(42, 10, 5);
        assert_eq!(pos.to_string(), "42:10:5");
    }

    #[test]
    fn test_error_creation() {
        let err = Error::at(ErrorKind::MissingHeader, 0, 1, 1);
        assert_eq!(err.kind(), &ErrorKind::MissingHeader);
        assert_eq!(err.span().start.line, 1);
    }

    #[test]
    fn test_error_display() {
        let err = Error::at(ErrorKind::TrailingInput, 10, 2, 5);
        let display = err.to_string();
        assert!(display.contains("error at 10:2:5"));
        assert!(display.contains("trailing content"));
    }

    #[test]
    fn test_mismatched_close_tag_names_the_tag() {
        let kind = ErrorKind::MismatchedCloseTag {
            tag: "versions".to_string(),
        };
        assert_eq!(kind.to_string(), "missing close tag </versions>");
    }

    #[test]
    fn test_custom_message_is_kept() {
        let err = Error::with_message(
            ErrorKind::MalformedAttribute,
            Span::empty(),
            "malformed attribute: x=>",
        );
        assert_eq!(err.message(), "malformed attribute: x=>");
    }
}
