use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stories_core::model::MediaBase;
use thiserror::Error;

/// Errors surfaced by story sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// One user entry of the stories document, as written on disk or on the wire.
///
/// `storyItems` may be missing or `null`; such users are dropped when the
/// collection is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_thumbnail: String,
    #[serde(default)]
    pub story_items: Option<Vec<StoryItemRecord>>,
}

impl UserRecord {
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.story_items.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryItemRecord {
    /// Missing or `null` reads as `None`; the item is dropped later.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Parse a stories document.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON.
pub fn parse_users(bytes: &[u8]) -> Result<Vec<UserRecord>, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Render a stories document.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the records cannot be encoded.
pub fn render_users(users: &[UserRecord]) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(users)?)
}

/// Read-only provider of the stories document.
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Load every user record, in display order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document is unavailable or malformed.
    async fn load_users(&self) -> Result<Vec<UserRecord>, StorageError>;

    /// Base for relative media references, if the source has one.
    fn media_base(&self) -> Option<MediaBase> {
        None
    }
}

/// Simple in-memory source for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySource {
    users: Vec<UserRecord>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl StorySource for InMemorySource {
    async fn load_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        Ok(self.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document_shape() {
        let json = br#"[
            {"userName": "Ana", "userThumbnail": "ana.png",
             "storyItems": [{"imageUrl": "a1.jpg"}, {"imageUrl": "a2.jpg"}]},
            {"userName": "Ben", "userThumbnail": "ben.png", "storyItems": null},
            {"userName": "Cy", "userThumbnail": "cy.png"}
        ]"#;
        let users = parse_users(json).unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].user_name, "Ana");
        assert_eq!(users[0].item_count(), 2);
        assert_eq!(users[1].item_count(), 0);
        assert_eq!(users[2].story_items, None);
    }

    #[test]
    fn tolerates_items_without_image_url() {
        let json = br#"[
            {"userName": "Ana", "storyItems": [{}, {"imageUrl": "a2.jpg"}]},
            {"userName": "Ben", "storyItems": [{"imageUrl": null}]},
            {"userName": "Cy", "storyItems": [{"imageUrl": "c1.jpg"}]}
        ]"#;
        let users = parse_users(json).unwrap();
        assert_eq!(users.len(), 3);
        let ana = users[0].story_items.as_deref().unwrap();
        assert_eq!(ana[0].image_url, None);
        assert_eq!(ana[1].image_url.as_deref(), Some("a2.jpg"));
        assert_eq!(users[1].story_items.as_deref().unwrap()[0].image_url, None);
        assert_eq!(users[2].item_count(), 1);
    }

    #[test]
    fn rejects_malformed_document() {
        let err = parse_users(b"{\"userName\": 1}").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn renders_camel_case_keys() {
        let users = vec![UserRecord {
            user_name: "Ana".into(),
            user_thumbnail: "ana.png".into(),
            story_items: Some(vec![StoryItemRecord {
                image_url: Some("a1.jpg".into()),
            }]),
        }];
        let json = render_users(&users).unwrap();
        assert!(json.contains("\"userThumbnail\""));
        assert!(json.contains("\"imageUrl\""));
        assert_eq!(parse_users(json.as_bytes()).unwrap(), users);
    }
}
