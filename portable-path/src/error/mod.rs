//! SUMMARY:
//! Define the crate-wide error type raised by path validation and the unsupported collaborators.
//!
//! OVERVIEW:
//! This module exposes `PortablePathError`, which captures missing required arguments,
//! paths carrying illegal characters, operations whose collaborator is not available,
//! and paths exceeding the configured maximum length. Errors are raised at the point of
//! detection, before any partial result is built.
use std::error::Error;
use std::fmt;

const MAX_ERROR_PATH_LEN: usize = 256;

// Internal helper: render error-friendly path display (truncate long values).
pub(crate) fn truncate_path_display(path: &str, max_len: usize) -> String {
    let char_count = path.chars().count();
    if char_count <= max_len {
        return path.to_owned();
    }
    let keep = max_len.saturating_sub(5) / 2;
    let start: String = path.chars().take(keep).collect();
    let mut tail_chars: Vec<char> = path.chars().rev().take(keep).collect();
    tail_chars.reverse();
    let end: String = tail_chars.into_iter().collect();
    format!("{start}...{end}")
}

// Control characters would garble a terminal; show them as escapes instead.
fn escape_for_display(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

/// SUMMARY:
/// Represent errors produced by path validation and by operations without a collaborator.
///
/// VARIANTS:
/// - `InvalidArgument`: A required path argument was absent.
/// - `InvalidFormat`: A path contains a character from the active illegal-character set.
/// - `Unsupported`: The operation needs a collaborator (normalizer, resolver) that is not provided.
/// - `PathTooLong`: A path is longer than the configured `max_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortablePathError {
    /// SUMMARY:
    /// A required argument was absent.
    ///
    /// FIELDS:
    /// - `parameter` (`&'static str`): Name of the missing argument.
    InvalidArgument { parameter: &'static str },
    /// SUMMARY:
    /// The path contains an illegal character.
    ///
    /// FIELDS:
    /// - `path` (`String`): The rejected path, as supplied.
    InvalidFormat { path: String },
    /// The operation is not available. Not a transient condition; retrying has no effect.
    Unsupported { operation: &'static str },
    /// SUMMARY:
    /// The path exceeds the platform's maximum path length.
    ///
    /// FIELDS:
    /// - `path` (`String`): The offending path.
    /// - `limit` (`usize`): The configured maximum, in bytes.
    PathTooLong { path: String, limit: usize },
}

impl PortablePathError {
    // Internal helper: construct `InvalidArgument`.
    #[inline]
    pub(crate) fn invalid_argument(parameter: &'static str) -> Self {
        Self::InvalidArgument { parameter }
    }
    // Internal helper: construct `InvalidFormat`.
    #[inline]
    pub(crate) fn invalid_format(path: &str) -> Self {
        Self::InvalidFormat {
            path: path.to_owned(),
        }
    }
    // Internal helper: construct `Unsupported`.
    #[inline]
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }
    // Internal helper: construct `PathTooLong`.
    #[inline]
    pub(crate) fn path_too_long(path: &str, limit: usize) -> Self {
        Self::PathTooLong {
            path: path.to_owned(),
            limit,
        }
    }

    /// Short, stable name of the error kind, suitable for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            PortablePathError::InvalidArgument { .. } => "invalid_argument",
            PortablePathError::InvalidFormat { .. } => "invalid_format",
            PortablePathError::Unsupported { .. } => "unsupported",
            PortablePathError::PathTooLong { .. } => "path_too_long",
        }
    }
}

impl fmt::Display for PortablePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortablePathError::InvalidArgument { parameter } => {
                write!(f, "Required argument '{parameter}' is missing")
            }
            PortablePathError::InvalidFormat { path } => {
                let truncated = truncate_path_display(path, MAX_ERROR_PATH_LEN);
                write!(
                    f,
                    "Illegal characters in path '{}'",
                    escape_for_display(&truncated)
                )
            }
            PortablePathError::Unsupported { operation } => {
                write!(f, "Operation '{operation}' is not supported")
            }
            PortablePathError::PathTooLong { path, limit } => {
                let truncated = truncate_path_display(path, MAX_ERROR_PATH_LEN);
                write!(
                    f,
                    "Path '{}' exceeds the maximum length of {limit}",
                    escape_for_display(&truncated)
                )
            }
        }
    }
}

impl Error for PortablePathError {}
