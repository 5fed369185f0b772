use crate::error::PortablePathError;
use crate::platform::SeparatorConfig;
use crate::validator::illegal_chars::ensure_legal;
use crate::validator::root_length::is_path_rooted;
use crate::Result;

/// Fail with `PathTooLong` when `path` is longer than `config.max_path` bytes.
pub fn check_path_length(path: &str, config: &SeparatorConfig) -> Result<()> {
    if path.len() > config.max_path {
        tracing::debug!(
            kind = "path_too_long",
            len = path.len(),
            limit = config.max_path,
            "path rejected: too long"
        );
        return Err(PortablePathError::path_too_long(path, config.max_path));
    }
    Ok(())
}

/// SUMMARY:
/// Join two path strings with the primary directory separator.
///
/// DETAILS:
/// - A rooted `right` replaces `left` entirely.
/// - An empty side yields the other side.
/// - No separator is inserted when `left` already ends with a directory, alternate or
///   volume separator (`C:` + `x` is `C:x`, matching drive-relative syntax).
///
/// ERRORS:
/// - `PortablePathError::InvalidArgument`: either side is `None`.
/// - `PortablePathError::InvalidFormat`: either side contains an illegal character.
/// - `PortablePathError::PathTooLong`: the joined path exceeds `config.max_path`.
///
/// EXAMPLE:
/// ```rust
/// use portable_path::{combine, SeparatorConfig};
///
/// # fn main() -> portable_path::Result<()> {
/// let windows = SeparatorConfig::WINDOWS;
/// assert_eq!(combine(Some("C:\\data"), Some("logs\\a.txt"), &windows)?, "C:\\data\\logs\\a.txt");
/// assert_eq!(combine(Some("C:\\data"), Some("D:\\other"), &windows)?, "D:\\other");
/// assert_eq!(combine(Some("/srv/"), Some("www"), &SeparatorConfig::POSIX)?, "/srv/www");
/// # Ok(()) }
/// ```
pub fn combine(
    left: Option<&str>,
    right: Option<&str>,
    config: &SeparatorConfig,
) -> Result<String> {
    let left = left.ok_or_else(|| PortablePathError::invalid_argument("left"))?;
    let right = right.ok_or_else(|| PortablePathError::invalid_argument("right"))?;
    ensure_legal(left, false)?;
    ensure_legal(right, false)?;

    let joined = if right.is_empty() {
        left.to_owned()
    } else if left.is_empty() || is_path_rooted(Some(right), config)? {
        right.to_owned()
    } else {
        match left.chars().next_back() {
            Some(last) if config.is_segment_boundary(last) => format!("{left}{right}"),
            _ => format!("{left}{}{right}", config.directory_separator),
        }
    };
    check_path_length(&joined, config)?;
    Ok(joined)
}

/// Split a `PATH`-style list on `config.path_separator`, dropping empty entries.
///
/// Every entry is validated; the first illegal one fails the whole list.
pub fn split_path_list<'a>(list: &'a str, config: &SeparatorConfig) -> Result<Vec<&'a str>> {
    list.split(config.path_separator)
        .filter(|entry| !entry.is_empty())
        .map(|entry| ensure_legal(entry, false).map(|()| entry))
        .collect()
}
