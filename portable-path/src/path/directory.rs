use crate::path::normalizer::{PassThrough, PathNormalizer};
use crate::platform::SeparatorConfig;
use crate::validator::illegal_chars::ensure_legal;
use crate::validator::root_length::root_length;
use crate::Result;
use std::borrow::Cow;

/// SUMMARY:
/// Return the parent-directory part of `path`, never walking above its root.
///
/// DETAILS:
/// Equivalent to `get_directory_name_with(path, config, &PassThrough)`.
///
/// RETURNS:
/// - `None` when `path` is `None` or denotes a root (`/`, `C:\`, `\\server\share\`, or `""`).
/// - `Some(prefix)` otherwise: the text before the last directory separator that lies after
///   the root, or the root itself when no such separator exists. A relative single segment
///   yields `Some("")`.
///
/// ERRORS:
/// - `PortablePathError::InvalidFormat`: `path` contains an illegal character.
///
/// EXAMPLE:
/// ```rust
/// use portable_path::{get_directory_name, SeparatorConfig};
///
/// # fn main() -> portable_path::Result<()> {
/// let posix = SeparatorConfig::POSIX;
/// assert_eq!(get_directory_name(Some("/usr/local/bin"), &posix)?.as_deref(), Some("/usr/local"));
/// assert_eq!(get_directory_name(Some("/usr"), &posix)?.as_deref(), Some("/"));
/// assert_eq!(get_directory_name(Some("/"), &posix)?, None);
///
/// let windows = SeparatorConfig::WINDOWS;
/// assert_eq!(get_directory_name(Some("C:\\foo"), &windows)?.as_deref(), Some("C:\\"));
/// # Ok(()) }
/// ```
pub fn get_directory_name<'a>(
    path: Option<&'a str>,
    config: &SeparatorConfig,
) -> Result<Option<Cow<'a, str>>> {
    get_directory_name_with(path, config, &PassThrough)
}

/// SUMMARY:
/// `get_directory_name` with an explicit normalizer collaborator.
///
/// DETAILS:
/// The path is validated, handed to `normalizer`, and the backward scan runs over the
/// normalized form.
pub fn get_directory_name_with<'a, N: PathNormalizer + ?Sized>(
    path: Option<&'a str>,
    config: &SeparatorConfig,
    normalizer: &N,
) -> Result<Option<Cow<'a, str>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    ensure_legal(path, false)?;
    let normalized = normalizer.normalize(path)?;
    let root = root_length(&normalized, config)?;
    let len = normalized.len();
    debug_assert!(root <= len, "root length {root} past end of {len}-byte path");

    if len <= root {
        tracing::trace!(root, "path is its own root; no parent");
        return Ok(None);
    }

    let end = parent_end(&normalized[root..], config).map_or(root, |i| root + i);
    tracing::trace!(root, end, len, "directory boundary located");

    let parent = match normalized {
        Cow::Borrowed(s) => Cow::Borrowed(&s[..end]),
        Cow::Owned(mut s) => {
            s.truncate(end);
            Cow::Owned(s)
        }
    };
    Ok(Some(parent))
}

// Offset, within the text after the root, of the last directory separator.
fn parent_end(after_root: &str, config: &SeparatorConfig) -> Option<usize> {
    after_root
        .char_indices()
        .rev()
        .find(|&(_, c)| config.is_directory_separator(c))
        .map(|(i, _)| i)
}
