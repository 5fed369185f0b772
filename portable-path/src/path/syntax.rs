use crate::path::normalizer::{PassThrough, PathNormalizer};
use crate::path::{compose, directory, extension};
use crate::platform::{Platform, SeparatorConfig};
use crate::validator::root_length;
use crate::Result;
use std::borrow::Cow;

/// SUMMARY:
/// A platform's path syntax bundled with the normalizer collaborator.
///
/// DETAILS:
/// Every method forwards to the free function of the same name with this value's
/// `SeparatorConfig`, so a caller configures the platform once instead of threading the
/// config through each call. The value is immutable and `Sync` when the normalizer is,
/// so one instance can be shared across threads.
///
/// EXAMPLE:
/// ```rust
/// use portable_path::{PathSyntax, Platform};
///
/// # fn main() -> portable_path::Result<()> {
/// let windows = PathSyntax::new(Platform::Windows);
/// assert_eq!(windows.root_length("C:\\foo")?, 3);
/// assert_eq!(windows.get_directory_name(Some("C:\\foo\\bar.txt"))?.as_deref(), Some("C:\\foo"));
/// assert_eq!(windows.get_extension(Some("C:\\foo\\bar.txt"))?, Some(".txt"));
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSyntax<N = PassThrough> {
    config: SeparatorConfig,
    normalizer: N,
}

impl PathSyntax<PassThrough> {
    #[inline]
    pub fn new(platform: Platform) -> Self {
        Self::from_config(SeparatorConfig::for_platform(platform))
    }

    #[inline]
    pub fn from_config(config: SeparatorConfig) -> Self {
        Self {
            config,
            normalizer: PassThrough,
        }
    }
}

impl<N: PathNormalizer> PathSyntax<N> {
    /// Replace the normalizer used by `get_directory_name`.
    pub fn with_normalizer<M: PathNormalizer>(self, normalizer: M) -> PathSyntax<M> {
        PathSyntax {
            config: self.config,
            normalizer,
        }
    }

    #[inline]
    pub fn config(&self) -> &SeparatorConfig {
        &self.config
    }

    #[inline]
    pub fn platform(&self) -> Platform {
        self.config.platform
    }

    #[inline]
    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }

    pub fn root_length(&self, path: &str) -> Result<usize> {
        root_length::root_length(path, &self.config)
    }

    pub fn is_path_rooted(&self, path: Option<&str>) -> Result<bool> {
        root_length::is_path_rooted(path, &self.config)
    }

    pub fn get_path_root<'a>(&self, path: Option<&'a str>) -> Result<Option<&'a str>> {
        root_length::get_path_root(path, &self.config)
    }

    pub fn get_extension<'a>(&self, path: Option<&'a str>) -> Result<Option<&'a str>> {
        extension::get_extension(path, &self.config)
    }

    pub fn has_extension(&self, path: Option<&str>) -> Result<bool> {
        extension::has_extension(path, &self.config)
    }

    pub fn change_extension<'a>(
        &self,
        path: Option<&'a str>,
        extension: Option<&str>,
    ) -> Result<Option<Cow<'a, str>>> {
        extension::change_extension(path, extension, &self.config)
    }

    pub fn get_file_name<'a>(&self, path: Option<&'a str>) -> Result<Option<&'a str>> {
        extension::get_file_name(path, &self.config)
    }

    pub fn get_file_name_without_extension<'a>(
        &self,
        path: Option<&'a str>,
    ) -> Result<Option<&'a str>> {
        extension::get_file_name_without_extension(path, &self.config)
    }

    pub fn get_directory_name<'a>(&self, path: Option<&'a str>) -> Result<Option<Cow<'a, str>>> {
        directory::get_directory_name_with(path, &self.config, &self.normalizer)
    }

    pub fn combine(&self, left: Option<&str>, right: Option<&str>) -> Result<String> {
        compose::combine(left, right, &self.config)
    }

    pub fn check_path_length(&self, path: &str) -> Result<()> {
        compose::check_path_length(path, &self.config)
    }

    pub fn split_path_list<'a>(&self, list: &'a str) -> Result<Vec<&'a str>> {
        compose::split_path_list(list, &self.config)
    }
}

impl From<Platform> for PathSyntax<PassThrough> {
    fn from(platform: Platform) -> Self {
        PathSyntax::new(platform)
    }
}
