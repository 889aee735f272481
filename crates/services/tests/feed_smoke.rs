use std::sync::Arc;

use async_trait::async_trait;
use services::{FeedError, StoryFeedService};
use storage::{InMemorySource, StorageError, StorySource, StoryItemRecord, UserRecord};

struct UnavailableSource;

#[async_trait]
impl StorySource for UnavailableSource {
    async fn load_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

fn user(name: &str, items: usize) -> UserRecord {
    UserRecord {
        user_name: name.into(),
        user_thumbnail: format!("https://cdn.example.com/{name}.png"),
        story_items: Some(
            (0..items)
                .map(|i| StoryItemRecord {
                    image_url: Some(format!("https://cdn.example.com/{name}/{i}.jpg")),
                })
                .collect(),
        ),
    }
}

#[tokio::test]
async fn feed_loads_non_empty_users_in_order() {
    let source = InMemorySource::new(vec![user("ana", 2), user("ben", 0), user("cy", 1)]);
    let feed = StoryFeedService::new(Arc::new(source));

    let stories = feed.load_collection().await.unwrap();
    assert_eq!(stories.user_count(), 2);
    assert_eq!(stories.user(0).unwrap().display_name(), "ana");
    assert_eq!(stories.item_count(0), Some(2));
    assert_eq!(stories.user(1).unwrap().display_name(), "cy");
    assert_eq!(
        stories.item(1, 0).unwrap().media().to_string(),
        "https://cdn.example.com/cy/0.jpg"
    );
}

#[tokio::test]
async fn feed_surfaces_source_failures() {
    let feed = StoryFeedService::new(Arc::new(UnavailableSource));
    let err = feed.load_collection().await.unwrap_err();
    assert!(matches!(err, FeedError::Storage(StorageError::Connection(_))));
}
