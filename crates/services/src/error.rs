//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `RemoteStorySource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RemoteSourceError {
    #[error("stories request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl From<RemoteSourceError> for StorageError {
    fn from(err: RemoteSourceError) -> Self {
        match err {
            RemoteSourceError::Http(err) if err.is_decode() => {
                StorageError::Serialization(err.to_string())
            }
            other => StorageError::Connection(other.to_string()),
        }
    }
}

/// Errors emitted by `StoryFeedService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    #[error("invalid stories url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
