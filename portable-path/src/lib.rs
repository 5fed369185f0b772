//! # portable-path
//!
//! Platform-aware path string manipulation that never touches the file system.
//!
//! Given path *text* and an explicit [`SeparatorConfig`], this crate extracts or rewrites
//! structural pieces of a path: the extension, the parent directory, and the root prefix
//! (drive letter, UNC share, or POSIX leading `/`). The platform is a value you pass in,
//! not the one the process runs on, so Windows paths can be handled on Linux and the other
//! way round.
//!
//! ## Quick start
//!
//! ```rust
//! use portable_path::{change_extension, get_directory_name, get_extension, SeparatorConfig};
//!
//! # fn main() -> portable_path::Result<()> {
//! let posix = SeparatorConfig::POSIX;
//!
//! assert_eq!(get_extension(Some("photos/cat.jpeg"), &posix)?, Some(".jpeg"));
//! let renamed = change_extension(Some("photos/cat.jpeg"), Some("png"), &posix)?;
//! assert_eq!(renamed.as_deref(), Some("photos/cat.png"));
//! assert_eq!(get_directory_name(Some("/usr/local/bin"), &posix)?.as_deref(), Some("/usr/local"));
//! # Ok(()) }
//! ```
//!
//! ## How the pieces fit
//!
//! - [`validator::illegal_chars`] rejects path text containing control characters or
//!   `"<>|` (and, on request, the wildcards `*?`). Every other operation runs this first.
//! - [`validator::root_length`] measures the root prefix. Backward scans for the parent
//!   directory stop there, so `/` and `C:\` have no parent.
//! - [`path::extension`] finds the last `.` of the final segment.
//! - [`path::directory`] cuts at the last separator after the root.
//!
//! Absent input (`None`) is a valid argument to the path operations and always yields an
//! absent result. Illegal characters are an error, never silently skipped.
//!
//! ## Threading a platform
//!
//! Free functions take `&SeparatorConfig`. [`PathSyntax`] bundles one with a
//! [`PathNormalizer`] when you would rather configure once:
//!
//! ```rust
//! use portable_path::{PathSyntax, Platform};
//!
//! # fn main() -> portable_path::Result<()> {
//! let windows = PathSyntax::new(Platform::Windows);
//! let unc = Some("\\\\server\\share\\docs\\a.txt");
//! assert_eq!(windows.get_path_root(unc)?, Some("\\\\server\\share\\"));
//! assert_eq!(windows.get_directory_name(Some("\\\\server\\share\\"))?, None);
//! # Ok(()) }
//! ```
//!
//! ## Logging
//!
//! Rejections are reported as `tracing` events at `debug` level and structural boundaries
//! at `trace` level. The crate never installs a subscriber.
#![forbid(unsafe_code)]

pub mod error;
pub mod path;
pub mod platform;
pub mod validator;

// Public exports
pub use error::PortablePathError;
pub use path::compose::{check_path_length, combine, split_path_list};
pub use path::directory::{get_directory_name, get_directory_name_with};
pub use path::extension::{
    change_extension, get_extension, get_file_name, get_file_name_without_extension,
    has_extension,
};
pub use path::normalizer::{get_full_path, normalize_path, PassThrough, PathNormalizer};
pub use path::syntax::PathSyntax;
pub use platform::{ParsePlatformError, Platform, SeparatorConfig};
pub use validator::illegal_chars::{
    check_invalid_path_chars, has_illegal_characters, has_illegal_file_name_characters,
    IllegalCharacterSet,
};
pub use validator::root_length::{get_path_root, is_path_rooted, root_length};

/// Result type alias for this crate's operations.
pub type Result<T> = std::result::Result<T, PortablePathError>;
