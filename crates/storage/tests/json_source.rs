use std::path::PathBuf;

use stories_core::model::MediaBase;
use storage::{JsonFileSource, StorageError, StorySource};

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("stories-json-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join("stories.json")
}

#[tokio::test]
async fn loads_users_from_file() {
    let path = temp_path("load");
    std::fs::write(
        &path,
        r#"[{"userName": "Ana", "userThumbnail": "ana.png",
             "storyItems": [{"imageUrl": "images/a1.jpg"}]}]"#,
    )
    .unwrap();

    let source = JsonFileSource::new(&path);
    let users = source.load_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].user_name, "Ana");
    assert_eq!(
        source.media_base(),
        Some(MediaBase::Dir(path.parent().unwrap().to_path_buf()))
    );
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let source = JsonFileSource::new(temp_path("missing").with_file_name("absent.json"));
    let err = source.load_users().await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
}

#[tokio::test]
async fn malformed_file_is_a_serialization_error() {
    let path = temp_path("malformed");
    std::fs::write(&path, "not json").unwrap();

    let err = JsonFileSource::new(&path).load_users().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[test]
fn bare_file_name_has_no_media_base() {
    assert_eq!(JsonFileSource::new("stories.json").media_base(), None);
}
