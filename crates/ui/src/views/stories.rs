use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use stories_core::model::StoryCollection;
use stories_core::playback::{PlaybackSettings, ViewerIntent, ViewerKey};
use tracing::error;

use crate::context::AppContext;
use crate::views::{StoryViewer, ViewError, ViewState, view_state_from_resource};
use crate::vm::{ViewerVm, map_thumbnails, viewer_key};

const FOCUS_ROOT_JS: &str = r#"document.getElementById("stories-root")?.focus();"#;

#[component]
pub fn StoriesView() -> Element {
    let ctx = use_context::<AppContext>();
    let feed = ctx.story_feed();
    let settings = ctx.playback_settings();

    let resource = use_resource(move || {
        let feed = feed.clone();
        async move {
            feed.load_collection().await.map(Arc::new).map_err(|err| {
                error!(error = %err, "failed to load stories");
                ViewError::SourceUnavailable
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page stories-page",
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { class: "stories-status", "Loading..." }
                },
                ViewState::Ready(stories) => rsx! {
                    StoriesFeed { stories, settings }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "stories-error", "{err.message()}" }
                },
            }
        }
    }
}

/// Thumbnail row plus the viewer overlay for one loaded collection.
#[component]
pub fn StoriesFeed(stories: Arc<StoryCollection>, settings: PlaybackSettings) -> Element {
    let vm = use_signal({
        let stories = Arc::clone(&stories);
        move || ViewerVm::new(stories, settings)
    });

    // Per-frame tick, alive only while a timer runs. The resource restarts
    // whenever `ticking` flips; progress comes from absolute elapsed time,
    // so late or uneven wakeups only lower the sampling rate.
    let frame_interval = settings.frame_interval();
    let ticking = use_memo(move || vm.read().is_ticking());
    let _frame_loop = use_resource(move || async move {
        if !ticking() {
            return;
        }
        let mut vm = vm;
        loop {
            tokio::time::sleep(frame_interval).await;
            if !vm.write().on_frame() {
                break;
            }
        }
    });

    let dispatch = use_callback(move |intent: ViewerIntent| {
        let mut vm = vm;
        vm.write().dispatch(intent);
    });

    let on_open = use_callback(move |user_index: usize| {
        dispatch.call(ViewerIntent::Open { user_index });
        let _ = eval(FOCUS_ROOT_JS);
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let key = viewer_key(&evt.data.key());
        if key == ViewerKey::Other || !vm.peek().is_open() {
            return;
        }
        evt.prevent_default();
        let mut vm = vm;
        vm.write().handle_key(key);
    });

    rsx! {
        div { class: "stories-root", id: "stories-root", tabindex: "0", onkeydown: on_key,
            ThumbnailRow { stories, on_open }
            StoryViewer { vm, on_intent: dispatch }
        }
    }
}

#[component]
pub fn ThumbnailRow(stories: Arc<StoryCollection>, on_open: EventHandler<usize>) -> Element {
    let thumbnails = map_thumbnails(&stories);

    rsx! {
        div { class: "stories-container",
            for thumb in thumbnails {
                div {
                    key: "{thumb.user_index}",
                    class: "story-item",
                    onclick: move |_| on_open.call(thumb.user_index),
                    if let Some(src) = thumb.src.as_deref() {
                        img { src: "{src}", alt: "{thumb.alt}" }
                    } else {
                        span { class: "story-item__avatar", "{thumb.avatar}" }
                    }
                    p { class: "story-item__name", "{thumb.name}" }
                    span { class: "story-item__count", "{thumb.count_label}" }
                }
            }
        }
    }
}
