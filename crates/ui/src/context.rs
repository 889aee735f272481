use std::sync::Arc;

use services::StoryFeedService;
use stories_core::playback::PlaybackSettings;

pub trait UiApp: Send + Sync {
    fn playback_settings(&self) -> PlaybackSettings;

    fn story_feed(&self) -> Arc<StoryFeedService>;
}

#[derive(Clone)]
pub struct AppContext {
    playback_settings: PlaybackSettings,
    story_feed: Arc<StoryFeedService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            playback_settings: app.playback_settings(),
            story_feed: app.story_feed(),
        }
    }

    #[must_use]
    pub fn playback_settings(&self) -> PlaybackSettings {
        self.playback_settings
    }

    #[must_use]
    pub fn story_feed(&self) -> Arc<StoryFeedService> {
        Arc::clone(&self.story_feed)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
