use async_trait::async_trait;
use reqwest::Client;
use stories_core::model::MediaBase;
use storage::{StorageError, StorySource, UserRecord};
use url::Url;

use crate::error::RemoteSourceError;

/// Stories document fetched over HTTP.
///
/// Relative media references resolve against the document URL.
#[derive(Clone)]
pub struct RemoteStorySource {
    client: Client,
    url: Url,
}

impl RemoteStorySource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Fetch and decode the stories document.
    ///
    /// # Errors
    ///
    /// Returns `RemoteSourceError` when the request fails, the server answers
    /// with a non-success status, or the body is not a stories document.
    pub async fn fetch(&self) -> Result<Vec<UserRecord>, RemoteSourceError> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(RemoteSourceError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StorySource for RemoteStorySource {
    async fn load_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        Ok(self.fetch().await?)
    }

    fn media_base(&self) -> Option<MediaBase> {
        Some(MediaBase::Url(self.url.clone()))
    }
}
