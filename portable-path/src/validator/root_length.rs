use crate::platform::{Platform, SeparatorConfig};
use crate::validator::illegal_chars::ensure_legal;
use crate::Result;

/// SUMMARY:
/// Compute the length of the root prefix of `path` under `config`'s platform.
///
/// DETAILS:
/// The root is the part of a path below which no parent directory exists. Scans that walk
/// backward looking for directory boundaries must never cross it.
///
/// Windows:
/// - `\\server\share\rest` → the UNC prefix `\\server\share\` (two name runs after the
///   leading double separator, each ended by a separator or the end of the string).
/// - `\rest` → 1.
/// - `C:\rest` → 3; `C:rest` → 2.
/// - anything else → 0.
///
/// POSIX: 1 for a leading separator, otherwise 0.
///
/// The returned value is a byte offset and always satisfies `0 <= root <= path.len()`.
///
/// ERRORS:
/// - `PortablePathError::InvalidFormat`: `path` contains a character from the base illegal set.
///
/// EXAMPLE:
/// ```rust
/// use portable_path::{root_length, SeparatorConfig};
///
/// # fn main() -> portable_path::Result<()> {
/// assert_eq!(root_length("C:\\foo", &SeparatorConfig::WINDOWS)?, 3);
/// assert_eq!(root_length("relative\\path", &SeparatorConfig::WINDOWS)?, 0);
/// assert_eq!(root_length("\\\\server\\share\\docs", &SeparatorConfig::WINDOWS)?, 15);
/// assert_eq!(root_length("/usr/bin", &SeparatorConfig::POSIX)?, 1);
/// # Ok(()) }
/// ```
pub fn root_length(path: &str, config: &SeparatorConfig) -> Result<usize> {
    ensure_legal(path, false)?;
    let root = match config.platform {
        Platform::Windows => windows_root_length(path, config),
        Platform::Posix => posix_root_length(path, config),
    };
    debug_assert!(root <= path.len());
    tracing::trace!(platform = %config.platform, root, len = path.len(), "root length resolved");
    Ok(root)
}

fn posix_root_length(path: &str, config: &SeparatorConfig) -> usize {
    match path.chars().next() {
        Some(c) if config.is_directory_separator(c) => c.len_utf8(),
        _ => 0,
    }
}

fn windows_root_length(path: &str, config: &SeparatorConfig) -> usize {
    let mut chars = path.char_indices();
    let first = chars.next();
    let second = chars.next();
    match (first, second) {
        (Some((_, c0)), Some((i1, c1)))
            if config.is_directory_separator(c0) && config.is_directory_separator(c1) =>
        {
            let start = i1 + c1.len_utf8();
            start + unc_share_length(&path[start..], config)
        }
        (Some((_, c0)), _) if config.is_directory_separator(c0) => c0.len_utf8(),
        (Some(_), Some((i1, c1))) if c1 == config.volume_separator => {
            let end = i1 + c1.len_utf8();
            match path[end..].chars().next() {
                Some(c2) if config.is_directory_separator(c2) => end + c2.len_utf8(),
                _ => end,
            }
        }
        _ => 0,
    }
}

// Length of `server\share\` following the leading double separator. Two runs are
// consumed; the separator closing the second run belongs to the root.
fn unc_share_length(rest: &str, config: &SeparatorConfig) -> usize {
    let mut runs_left = 2u8;
    for (i, c) in rest.char_indices() {
        if config.is_directory_separator(c) {
            runs_left -= 1;
            if runs_left == 0 {
                return i + c.len_utf8();
            }
        }
    }
    rest.len()
}

/// `true` if `path` starts at a root: a leading directory separator, or (Windows) a volume
/// separator in second position.
pub fn is_path_rooted(path: Option<&str>, config: &SeparatorConfig) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    ensure_legal(path, false)?;
    let mut chars = path.chars();
    let rooted = match (chars.next(), chars.next()) {
        (Some(c0), _) if config.is_directory_separator(c0) => true,
        (Some(_), Some(c1)) => {
            config.platform == Platform::Windows && c1 == config.volume_separator
        }
        _ => false,
    };
    Ok(rooted)
}

/// The root prefix of `path` (`[0, root_length)`); empty for relative paths.
pub fn get_path_root<'a>(
    path: Option<&'a str>,
    config: &SeparatorConfig,
) -> Result<Option<&'a str>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let root = root_length(path, config)?;
    Ok(Some(&path[..root]))
}
