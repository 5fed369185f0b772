//! SUMMARY:
//! Describe the path syntax of a target platform as an explicit, immutable value.
//!
//! OVERVIEW:
//! `Platform` names the syntax family (Windows or POSIX); `SeparatorConfig` carries the
//! characters and limits derived from it. Nothing here inspects the host: callers pick the
//! platform and thread the config into every operation, so both syntaxes can be exercised
//! side by side in one process.
use std::fmt;
use std::str::FromStr;

/// The path syntax family a path string is interpreted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    /// Drive letters, UNC shares, `\` with `/` as alternate.
    Windows,
    /// A single `/` root and `/` separators.
    Posix,
}

impl Platform {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Posix => "posix",
        }
    }

    /// Separator configuration derived from this platform.
    #[inline]
    pub fn separators(self) -> SeparatorConfig {
        SeparatorConfig::for_platform(self)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a platform name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlatformError {
    input: String,
}

impl fmt::Display for ParsePlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown platform '{}' (expected 'windows' or 'posix')",
            self.input
        )
    }
}

impl std::error::Error for ParsePlatformError {}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" | "win32" => Ok(Platform::Windows),
            "posix" | "unix" | "linux" | "macos" => Ok(Platform::Posix),
            _ => Err(ParsePlatformError {
                input: s.to_owned(),
            }),
        }
    }
}

/// SUMMARY:
/// Separator characters and length limits of one platform.
///
/// DETAILS:
/// Built once (usually from a `Platform`) and passed by reference to every operation.
/// All separator characters are ASCII, so byte offsets found by scanning for them always
/// fall on UTF-8 character boundaries.
///
/// EXAMPLE:
/// ```rust
/// use portable_path::{Platform, SeparatorConfig};
///
/// let windows = SeparatorConfig::for_platform(Platform::Windows);
/// assert_eq!(windows.directory_separator, '\\');
/// assert!(windows.is_directory_separator('/'));
/// assert_eq!(SeparatorConfig::POSIX.path_separator, ':');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparatorConfig {
    pub platform: Platform,
    pub directory_separator: char,
    pub alt_directory_separator: char,
    pub volume_separator: char,
    /// Separates entries of a `PATH`-style list.
    pub path_separator: char,
    /// Maximum length of a full path, in bytes.
    pub max_path: usize,
    /// Maximum length of a single directory name, in bytes.
    pub max_directory_length: usize,
}

impl SeparatorConfig {
    pub const WINDOWS: SeparatorConfig = SeparatorConfig {
        platform: Platform::Windows,
        directory_separator: '\\',
        alt_directory_separator: '/',
        volume_separator: ':',
        path_separator: ';',
        max_path: 260,
        max_directory_length: 255,
    };

    pub const POSIX: SeparatorConfig = SeparatorConfig {
        platform: Platform::Posix,
        directory_separator: '/',
        alt_directory_separator: '/',
        volume_separator: '/',
        path_separator: ':',
        max_path: 4096,
        max_directory_length: 255,
    };

    #[inline]
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Windows => Self::WINDOWS,
            Platform::Posix => Self::POSIX,
        }
    }

    /// `true` for the primary or the alternate directory separator.
    #[inline]
    pub fn is_directory_separator(&self, c: char) -> bool {
        c == self.directory_separator || c == self.alt_directory_separator
    }

    /// `true` for any character that ends the final segment of a path when scanning
    /// backward: directory, alternate, or volume separator.
    #[inline]
    pub fn is_segment_boundary(&self, c: char) -> bool {
        self.is_directory_separator(c) || c == self.volume_separator
    }
}

impl From<Platform> for SeparatorConfig {
    #[inline]
    fn from(platform: Platform) -> Self {
        SeparatorConfig::for_platform(platform)
    }
}
