use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use stories_core::model::MediaBase;

use crate::repository::{StorageError, StorySource, UserRecord, parse_users};

/// Stories document stored as a JSON file on disk.
///
/// Relative media paths in the document are resolved against the file's
/// directory.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StorySource for JsonFileSource {
    async fn load_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| match err.kind() {
            ErrorKind::NotFound => StorageError::NotFound(self.path.display().to_string()),
            _ => StorageError::Io(err.to_string()),
        })?;
        parse_users(&bytes)
    }

    fn media_base(&self) -> Option<MediaBase> {
        self.path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| MediaBase::Dir(dir.to_path_buf()))
    }
}
