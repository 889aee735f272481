use std::sync::Arc;

use dioxus::prelude::*;
use stories_core::model::{MediaRef, StoryCollection, StoryItem, UserStories};
use stories_core::playback::{PlaybackSettings, ViewerIntent};

use crate::views::{StoriesFeed, StoryViewer};
use crate::vm::ViewerVm;

fn stories() -> Arc<StoryCollection> {
    let user = |name: &str, thumbnail: Option<&str>, items: usize| {
        let items = (0..items)
            .map(|i| StoryItem::new(MediaRef::parse(format!("{name}-{i}.jpg")).unwrap()))
            .collect();
        let thumbnail = thumbnail.map(|raw| MediaRef::parse(raw).unwrap());
        UserStories::new(name, thumbnail, items).unwrap()
    };
    Arc::new(StoryCollection::new(vec![
        user("ana", Some("https://cdn.example.com/ana.png"), 2),
        user("ben", None, 1),
    ]))
}

#[component]
fn FeedHarness() -> Element {
    rsx! {
        StoriesFeed { stories: stories(), settings: PlaybackSettings::default() }
    }
}

#[component]
fn OpenViewerHarness() -> Element {
    let vm = use_signal(|| {
        let mut vm = ViewerVm::new(stories(), PlaybackSettings::default());
        vm.dispatch(ViewerIntent::Open { user_index: 0 });
        vm
    });
    rsx! {
        StoryViewer { vm, on_intent: move |_| {} }
    }
}

#[tokio::test]
async fn feed_renders_thumbnails_with_viewer_hidden() {
    let mut dom = VirtualDom::new(FeedHarness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("https://cdn.example.com/ana.png"));
    assert!(html.contains("ana"));
    assert!(html.contains("2 stories"));
    assert!(html.contains("story-item__avatar"));
    assert!(!html.contains("story-viewer"));
}

#[test]
fn open_viewer_renders_segments_and_loading_image() {
    let mut dom = VirtualDom::new(OpenViewerHarness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert_eq!(html.matches("\"story-progress-segment\"").count(), 2);
    assert!(html.contains("width: 0%;"));
    assert!(html.contains("ana-0.jpg"));
    assert!(html.contains("story-image--loading"));
    assert!(html.contains("close-story-viewer"));
}
