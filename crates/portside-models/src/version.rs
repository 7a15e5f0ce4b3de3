//! Engine API version handling.
//!
//! The engine negotiates a `major.minor` API version out of band (the
//! transport layer reads it from the version endpoint or a response header).
//! Decoding is pinned to a closed window of revisions: payload shapes from
//! versions outside the window are rejected up front instead of being
//! decoded on a best-effort basis.

use crate::error::{DecodeError, Result};
use std::fmt;
use std::str::FromStr;

/// An engine API version, ordered by `major` then `minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    major: u32,
    minor: u32,
}

impl ApiVersion {
    /// Oldest API revision with a recognized payload shape.
    pub const MIN_SUPPORTED: Self = Self::new(1, 18);

    /// Newest API revision with a recognized payload shape. Field semantics
    /// in the entity model follow this revision.
    pub const PINNED: Self = Self::new(1, 43);

    /// Revision that introduced mount descriptors, superseding the
    /// `Volumes`/`VolumesRW` map pair.
    pub const MOUNTS_INTRODUCED: Self = Self::new(1, 20);

    /// Creates a version from raw components.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Major component.
    #[must_use]
    pub const fn major(self) -> u32 {
        self.major
    }

    /// Minor component.
    #[must_use]
    pub const fn minor(self) -> u32 {
        self.minor
    }

    /// Whether this revision falls inside the supported window.
    #[must_use]
    pub fn is_supported(self) -> bool {
        (Self::MIN_SUPPORTED..=Self::PINNED).contains(&self)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ApiVersion {
    type Err = DecodeError;

    /// Parses `"1.43"` (optionally prefixed with `v`, as in request paths).
    fn from_str(s: &str) -> Result<Self> {
        let unsupported = || DecodeError::UnsupportedEngineVersion {
            version: s.to_string(),
        };

        let trimmed = s.strip_prefix('v').unwrap_or(s);
        let (major, minor) = trimmed.split_once('.').ok_or_else(unsupported)?;
        let major = major.parse().map_err(|_| unsupported())?;
        let minor = minor.parse().map_err(|_| unsupported())?;
        Ok(Self::new(major, minor))
    }
}
