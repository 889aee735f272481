use std::sync::Arc;

use stories_core::model::{MediaBase, MediaRef, StoryCollection, StoryItem, UserStories};
use storage::{JsonFileSource, StorySource, UserRecord};
use tracing::{debug, info};
use url::Url;

use crate::error::FeedError;
use crate::remote_source::RemoteStorySource;

/// Loads the stories document once and turns it into a `StoryCollection`.
#[derive(Clone)]
pub struct StoryFeedService {
    source: Arc<dyn StorySource>,
}

impl StoryFeedService {
    #[must_use]
    pub fn new(source: Arc<dyn StorySource>) -> Self {
        Self { source }
    }

    /// # Errors
    ///
    /// Returns `FeedError::Storage` if the source is unavailable or malformed.
    pub async fn load_collection(&self) -> Result<StoryCollection, FeedError> {
        let records = self.source.load_users().await?;
        let base = self.source.media_base();
        let stories = build_collection(records, base.as_ref());
        info!(users = stories.user_count(), "stories loaded");
        Ok(stories)
    }
}

/// Convert raw records, dropping blank media references and users left
/// without items.
#[must_use]
pub fn build_collection(records: Vec<UserRecord>, base: Option<&MediaBase>) -> StoryCollection {
    let resolve = |media: MediaRef| match base {
        Some(base) => media.resolve(base),
        None => media,
    };

    let users = records
        .into_iter()
        .filter_map(|record| {
            let thumbnail = MediaRef::parse(&record.user_thumbnail).ok().map(resolve);
            let items = record
                .story_items
                .unwrap_or_default()
                .into_iter()
                .filter_map(|item| match MediaRef::parse(item.image_url.unwrap_or_default()) {
                    Ok(media) => Some(StoryItem::new(resolve(media))),
                    Err(err) => {
                        debug!(user = %record.user_name, error = %err, "dropping story item");
                        None
                    }
                })
                .collect();

            match UserStories::new(record.user_name, thumbnail, items) {
                Ok(user) => Some(user),
                Err(err) => {
                    debug!(error = %err, "skipping user");
                    None
                }
            }
        })
        .collect();

    StoryCollection::new(users)
}

/// Pick a source for `location`: `http(s)://` URLs are fetched, anything else
/// is read as a JSON file.
///
/// # Errors
///
/// Returns `FeedError::InvalidUrl` for an unparsable http(s) location.
pub fn source_from_location(location: &str) -> Result<Arc<dyn StorySource>, FeedError> {
    let location = location.trim();
    if location.starts_with("http://") || location.starts_with("https://") {
        let url = Url::parse(location)?;
        return Ok(Arc::new(RemoteStorySource::new(url)));
    }
    Ok(Arc::new(JsonFileSource::new(location)))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use storage::StoryItemRecord;

    use super::*;

    fn record(name: &str, items: &[&str]) -> UserRecord {
        UserRecord {
            user_name: name.into(),
            user_thumbnail: format!("{name}.png"),
            story_items: Some(
                items
                    .iter()
                    .map(|url| StoryItemRecord {
                        image_url: Some((*url).into()),
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn drops_users_without_items() {
        let stories = build_collection(
            vec![
                record("ana", &["a1.jpg"]),
                record("ben", &[]),
                UserRecord {
                    user_name: "cy".into(),
                    ..UserRecord::default()
                },
                record("dee", &["d1.jpg", "d2.jpg"]),
            ],
            None,
        );
        let names: Vec<_> = stories.iter().map(UserStories::display_name).collect();
        assert_eq!(names, ["ana", "dee"]);
    }

    #[test]
    fn blank_media_refs_are_dropped() {
        let stories = build_collection(
            vec![record("ana", &["  ", "a2.jpg"]), record("ben", &[""])],
            None,
        );
        assert_eq!(stories.user_count(), 1);
        assert_eq!(stories.item_count(0), Some(1));
    }

    #[test]
    fn items_without_image_url_are_dropped() {
        let records = storage::repository::parse_users(
            br#"[
                {"userName": "ana", "storyItems": [{}, {"imageUrl": null}, {"imageUrl": "a.jpg"}]},
                {"userName": "ben", "storyItems": [{"imageUrl": null}]},
                {"userName": "cy", "storyItems": [{"imageUrl": "c1.jpg"}]}
            ]"#,
        )
        .unwrap();
        let stories = build_collection(records, None);

        let names: Vec<_> = stories.iter().map(UserStories::display_name).collect();
        assert_eq!(names, ["ana", "cy"]);
        assert_eq!(stories.item_count(0), Some(1));
        assert_eq!(
            stories.item(0, 0).map(|item| item.media().to_string()),
            Some("a.jpg".into())
        );
    }

    #[test]
    fn relative_refs_resolve_against_base() {
        let base = MediaBase::Dir(PathBuf::from("/srv/feed"));
        let stories = build_collection(vec![record("ana", &["a1.jpg"])], Some(&base));
        let user = stories.user(0).unwrap();
        assert_eq!(
            user.item(0).unwrap().media().as_path(),
            Some(Path::new("/srv/feed/a1.jpg"))
        );
        assert_eq!(
            user.thumbnail().and_then(MediaRef::as_path),
            Some(Path::new("/srv/feed/ana.png"))
        );
    }

    #[test]
    fn blank_thumbnail_becomes_none() {
        let mut ana = record("ana", &["a1.jpg"]);
        ana.user_thumbnail = String::new();
        let stories = build_collection(vec![ana], None);
        assert!(stories.user(0).unwrap().thumbnail().is_none());
    }

    #[test]
    fn http_locations_need_valid_urls() {
        assert!(source_from_location("https://example.com/stories.json").is_ok());
        assert!(source_from_location("stories.json").is_ok());
        let err = source_from_location("http://exa mple.com/stories.json").err();
        assert!(matches!(err, Some(FeedError::InvalidUrl(_))));
    }
}
