use crate::platform::SeparatorConfig;
use crate::validator::illegal_chars::ensure_legal;
use crate::Result;
use std::borrow::Cow;

/// Byte offset of the `.` that starts the extension of the final segment, if any.
///
/// Scans backward from the end; at each character the `.` test comes before the
/// separator test, and the scan stops at the first directory, alternate or volume
/// separator.
pub(crate) fn extension_boundary(path: &str, config: &SeparatorConfig) -> Option<usize> {
    for (i, c) in path.char_indices().rev() {
        if c == '.' {
            return Some(i);
        }
        if config.is_segment_boundary(c) {
            return None;
        }
    }
    None
}

/// Byte offset where the final segment (the file name) starts.
pub(crate) fn file_name_start(path: &str, config: &SeparatorConfig) -> usize {
    path.char_indices()
        .rev()
        .find(|&(_, c)| config.is_segment_boundary(c))
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// SUMMARY:
/// Return the extension of the final path segment, including its leading `.`.
///
/// RETURNS:
/// - `None` when `path` is `None`.
/// - `Some("")` when the final segment has no `.`, or ends with one (`"file."`).
/// - `Some(".ext")` otherwise, borrowed from `path`.
///
/// ERRORS:
/// - `PortablePathError::InvalidFormat`: `path` contains an illegal character.
///
/// EXAMPLE:
/// ```rust
/// use portable_path::{get_extension, SeparatorConfig};
///
/// # fn main() -> portable_path::Result<()> {
/// let posix = SeparatorConfig::POSIX;
/// assert_eq!(get_extension(Some("archive.tar.gz"), &posix)?, Some(".gz"));
/// assert_eq!(get_extension(Some("Makefile"), &posix)?, Some(""));
/// assert_eq!(get_extension(Some("v1.2/notes"), &posix)?, Some(""));
/// assert_eq!(get_extension(None, &posix)?, None);
/// # Ok(()) }
/// ```
pub fn get_extension<'a>(
    path: Option<&'a str>,
    config: &SeparatorConfig,
) -> Result<Option<&'a str>> {
    let Some(path) = path else {
        return Ok(None);
    };
    ensure_legal(path, false)?;
    let extension = match extension_boundary(path, config) {
        Some(dot) if dot + 1 < path.len() => &path[dot..],
        _ => "",
    };
    Ok(Some(extension))
}

/// `true` if the final segment carries a non-empty extension.
pub fn has_extension(path: Option<&str>, config: &SeparatorConfig) -> Result<bool> {
    Ok(get_extension(path, config)?.is_some_and(|ext| !ext.is_empty()))
}

/// SUMMARY:
/// Replace, add, or strip the extension of the final path segment.
///
/// PARAMETERS:
/// - `path` (`Option<&str>`): Path to edit; `None` yields `None`.
/// - `extension` (`Option<&str>`): New extension, with or without a leading `.`;
///   `None` strips the current extension.
///
/// DETAILS:
/// The base is `path` up to the last `.` of its final segment, or the whole path when
/// that segment has no `.`. A `.` is inserted between base and `extension` unless
/// `extension` already starts with one; an empty `extension` therefore leaves a
/// trailing `.`. An empty `path` is returned unchanged whatever `extension` is.
///
/// ERRORS:
/// - `PortablePathError::InvalidFormat`: `path` contains an illegal character.
///
/// EXAMPLE:
/// ```rust
/// use portable_path::{change_extension, SeparatorConfig};
///
/// # fn main() -> portable_path::Result<()> {
/// let posix = SeparatorConfig::POSIX;
/// let pdf = change_extension(Some("report.doc"), Some(".pdf"), &posix)?;
/// assert_eq!(pdf.as_deref(), Some("report.pdf"));
/// let stripped = change_extension(Some("archive.tar.gz"), None, &posix)?;
/// assert_eq!(stripped.as_deref(), Some("archive.tar"));
/// let added = change_extension(Some("notes"), Some("md"), &posix)?;
/// assert_eq!(added.as_deref(), Some("notes.md"));
/// # Ok(()) }
/// ```
pub fn change_extension<'a>(
    path: Option<&'a str>,
    extension: Option<&str>,
    config: &SeparatorConfig,
) -> Result<Option<Cow<'a, str>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    ensure_legal(path, false)?;
    let base = match extension_boundary(path, config) {
        Some(dot) => &path[..dot],
        None => path,
    };
    tracing::trace!(base_len = base.len(), len = path.len(), "extension boundary located");

    let edited = match extension {
        Some(extension) if !path.is_empty() => {
            let mut out = String::with_capacity(base.len() + extension.len() + 1);
            out.push_str(base);
            if !extension.starts_with('.') {
                out.push('.');
            }
            out.push_str(extension);
            Cow::Owned(out)
        }
        Some(_) => Cow::Borrowed(path),
        None => Cow::Borrowed(base),
    };
    Ok(Some(edited))
}

/// The final segment of `path`: everything after the last directory, alternate or volume
/// separator. Empty when `path` ends with a separator.
pub fn get_file_name<'a>(
    path: Option<&'a str>,
    config: &SeparatorConfig,
) -> Result<Option<&'a str>> {
    let Some(path) = path else {
        return Ok(None);
    };
    ensure_legal(path, false)?;
    Ok(Some(&path[file_name_start(path, config)..]))
}

/// The final segment of `path` with its extension removed.
pub fn get_file_name_without_extension<'a>(
    path: Option<&'a str>,
    config: &SeparatorConfig,
) -> Result<Option<&'a str>> {
    let Some(name) = get_file_name(path, config)? else {
        return Ok(None);
    };
    let stem = match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    };
    Ok(Some(stem))
}
