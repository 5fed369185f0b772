//! Collaborators that rewrite a whole path before it is inspected.
//!
//! Only the pass-through normalizer is provided. Real normalization (collapsing separators,
//! resolving `.` and `..`) and full-path resolution against a working directory have no
//! agreed contract here; callers needing them plug in their own `PathNormalizer`, and the
//! free-standing entry points report `Unsupported`.
use crate::error::PortablePathError;
use crate::Result;
use std::borrow::Cow;

/// SUMMARY:
/// Rewrite a validated path into the form that structural scans run on.
///
/// DETAILS:
/// Implementations must return a path of the same or shorter length and must not introduce
/// illegal characters. Returning `Cow::Borrowed` avoids an allocation when nothing changes.
pub trait PathNormalizer {
    fn normalize<'a>(&self, path: &'a str) -> Result<Cow<'a, str>>;
}

/// The no-op normalizer: hands the path back untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassThrough;

impl PathNormalizer for PassThrough {
    #[inline]
    fn normalize<'a>(&self, path: &'a str) -> Result<Cow<'a, str>> {
        Ok(Cow::Borrowed(path))
    }
}

impl<N: PathNormalizer + ?Sized> PathNormalizer for &N {
    #[inline]
    fn normalize<'a>(&self, path: &'a str) -> Result<Cow<'a, str>> {
        (**self).normalize(path)
    }
}

/// Normalize a path.
///
/// ERRORS:
/// - `PortablePathError::Unsupported`: always; no normalization algorithm is defined.
pub fn normalize_path(path: &str, _full_check: bool) -> Result<String> {
    tracing::debug!(len = path.len(), "normalize_path requested without a normalizer");
    Err(PortablePathError::unsupported("normalize_path"))
}

/// Resolve a path against the current directory or drive table.
///
/// ERRORS:
/// - `PortablePathError::Unsupported`: always; resolving needs file-system state this crate
///   never reads.
pub fn get_full_path(path: &str) -> Result<String> {
    tracing::debug!(len = path.len(), "get_full_path requested without a resolver");
    Err(PortablePathError::unsupported("get_full_path"))
}
