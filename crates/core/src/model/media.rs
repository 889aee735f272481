use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaRefError {
    #[error("Media reference cannot be empty.")]
    Empty,
}

/// Location relative media references are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaBase {
    Dir(PathBuf),
    Url(Url),
}

/// Opaque reference to a piece of story media: either a local file or a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaRef {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaRef {
    /// Parse a raw reference. Absolute URLs stay URLs, everything else is a path.
    ///
    /// # Errors
    ///
    /// Returns `MediaRefError::Empty` for blank input.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaRefError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaRefError::Empty);
        }
        match Url::parse(s) {
            // Single-letter schemes are Windows drive letters, not URLs.
            Ok(url) if url.scheme().len() > 1 => Ok(MediaRef::Url(url)),
            _ => Ok(MediaRef::FilePath(PathBuf::from(s))),
        }
    }

    /// Anchor a relative file path to `dir`. URLs and absolute paths are unchanged.
    #[must_use]
    pub fn resolve_against_dir(self, dir: &Path) -> Self {
        match self {
            MediaRef::FilePath(p) if p.is_relative() => MediaRef::FilePath(dir.join(p)),
            other => other,
        }
    }

    /// Turn a relative file path into a URL joined onto `base`.
    #[must_use]
    pub fn resolve_against_url(self, base: &Url) -> Self {
        match self {
            MediaRef::FilePath(p) if p.is_relative() => {
                match p.to_str().and_then(|s| base.join(s).ok()) {
                    Some(url) => MediaRef::Url(url),
                    None => MediaRef::FilePath(p),
                }
            }
            other => other,
        }
    }

    /// Anchor a relative file path to `base`.
    #[must_use]
    pub fn resolve(self, base: &MediaBase) -> Self {
        match base {
            MediaBase::Dir(dir) => self.resolve_against_dir(dir),
            MediaBase::Url(url) => self.resolve_against_url(url),
        }
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaRef::FilePath(p) => Some(p.as_path()),
            MediaRef::Url(_) => None,
        }
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaRef::Url(u) => Some(u),
            MediaRef::FilePath(_) => None,
        }
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaRef::FilePath(p) => write!(f, "{}", p.display()),
            MediaRef::Url(u) => f.write_str(u.as_str()),
        }
    }
}
