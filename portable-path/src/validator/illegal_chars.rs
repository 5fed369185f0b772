use crate::error::PortablePathError;
use crate::Result;

/// SUMMARY:
/// One of the fixed groups of characters rejected in path text.
///
/// DETAILS:
/// The set is chosen by validation strictness, never by platform:
/// - `Base`: ASCII control characters `0x00..=0x1F` plus `"`, `<`, `>`, `|`.
/// - `Strict`: `Base` plus the wildcards `*` and `?`.
/// - `FileName`: `Strict` plus `:`, `\` and `/`, for validating a single name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalCharacterSet {
    Base,
    Strict,
    FileName,
}

impl IllegalCharacterSet {
    /// The set used for path validation: `Strict` when additional checks are requested.
    #[inline]
    pub const fn for_path(check_additional: bool) -> Self {
        if check_additional {
            IllegalCharacterSet::Strict
        } else {
            IllegalCharacterSet::Base
        }
    }

    #[inline]
    pub fn contains(self, c: char) -> bool {
        let base = c <= '\u{1F}' || matches!(c, '"' | '<' | '>' | '|');
        match self {
            IllegalCharacterSet::Base => base,
            IllegalCharacterSet::Strict => base || matches!(c, '*' | '?'),
            IllegalCharacterSet::FileName => {
                base || matches!(c, '*' | '?' | ':' | '\\' | '/')
            }
        }
    }

    /// `true` if any character of `text` belongs to this set.
    #[inline]
    pub fn matches_any(self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }
}

/// SUMMARY:
/// Report whether `path` contains a character rejected in path text.
///
/// PARAMETERS:
/// - `path` (`&str`): Path to scan. An empty path is never illegal.
/// - `check_additional` (`bool`): Also reject the wildcards `*` and `?`.
///
/// EXAMPLE:
/// ```rust
/// use portable_path::has_illegal_characters;
///
/// assert!(!has_illegal_characters("logs/*.txt", false));
/// assert!(has_illegal_characters("logs/*.txt", true));
/// assert!(has_illegal_characters("a|b", false));
/// ```
#[inline]
pub fn has_illegal_characters(path: &str, check_additional: bool) -> bool {
    IllegalCharacterSet::for_path(check_additional).matches_any(path)
}

/// Report whether a single file name contains a character from the `FileName` set.
#[inline]
pub fn has_illegal_file_name_characters(name: &str) -> bool {
    IllegalCharacterSet::FileName.matches_any(name)
}

/// SUMMARY:
/// Validate a required path argument before its content is inspected.
///
/// ERRORS:
/// - `PortablePathError::InvalidArgument`: `path` is `None`.
/// - `PortablePathError::InvalidFormat`: `path` contains an illegal character.
pub fn check_invalid_path_chars(path: Option<&str>, check_additional: bool) -> Result<()> {
    let path = path.ok_or_else(|| {
        tracing::debug!(kind = "invalid_argument", "path argument is missing");
        PortablePathError::invalid_argument("path")
    })?;
    ensure_legal(path, check_additional)
}

// Internal helper: the present-path half of `check_invalid_path_chars`.
pub(crate) fn ensure_legal(path: &str, check_additional: bool) -> Result<()> {
    if has_illegal_characters(path, check_additional) {
        tracing::debug!(
            kind = "invalid_format",
            check_additional,
            len = path.len(),
            "path rejected: illegal characters"
        );
        return Err(PortablePathError::invalid_format(path));
    }
    Ok(())
}
