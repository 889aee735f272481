use std::sync::Arc;

use dioxus::prelude::Key;
use stories_core::Clock;
use stories_core::model::StoryCollection;
use stories_core::playback::{
    LoadTicket, MediaDisplay, MediaLoadError, MediaRequest, NavigationController,
    PlaybackSettings, PlaybackState, SegmentFills, ViewerIntent, ViewerKey,
};

/// Media display backed by plain state; the view renders whatever it holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayState {
    visible: bool,
    request: Option<MediaRequest>,
}

impl DisplayState {
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn request(&self) -> Option<&MediaRequest> {
        self.request.as_ref()
    }
}

impl MediaDisplay for DisplayState {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn show(&mut self, request: MediaRequest) {
        self.request = Some(request);
    }

    fn clear(&mut self) {
        self.request = None;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaFrame {
    pub ticket: LoadTicket,
    pub src: String,
    pub alt: String,
}

/// Snapshot of everything the viewer overlay renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerFrame {
    pub open: bool,
    pub loading: bool,
    pub user_name: Option<String>,
    pub segments: Vec<f64>,
    pub media: Option<MediaFrame>,
}

pub struct ViewerVm {
    controller: NavigationController<SegmentFills, DisplayState>,
}

impl ViewerVm {
    #[must_use]
    pub fn new(stories: Arc<StoryCollection>, settings: PlaybackSettings) -> Self {
        Self {
            controller: NavigationController::new(
                stories,
                settings,
                SegmentFills::new(),
                DisplayState::default(),
            ),
        }
    }

    #[must_use]
    pub fn with_clock(self, clock: Clock) -> Self {
        Self {
            controller: self.controller.with_clock(clock),
        }
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controller.display().visible()
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.controller.is_ticking()
    }

    #[must_use]
    pub fn frame(&self) -> ViewerFrame {
        let request = self.controller.display().request();
        let user_name = request
            .and_then(|request| self.controller.stories().user(request.cursor.user_index))
            .map(|user| user.display_name().to_string());
        let media = request.map(|request| MediaFrame {
            ticket: request.ticket,
            src: request.media.to_string(),
            alt: user_name
                .as_deref()
                .map_or_else(|| "Story".to_string(), |name| format!("{name}'s story")),
        });

        ViewerFrame {
            open: self.is_open(),
            loading: matches!(self.state(), PlaybackState::Loading(_)),
            user_name,
            segments: self.controller.progress().fills().to_vec(),
            media,
        }
    }

    pub fn dispatch(&mut self, intent: ViewerIntent) {
        self.controller.dispatch(intent);
    }

    pub fn handle_key(&mut self, key: ViewerKey) {
        self.controller.handle_key(key);
    }

    pub fn media_loaded(&mut self, ticket: LoadTicket) {
        self.controller.on_media_outcome(ticket, Ok(()));
    }

    pub fn media_failed(&mut self, ticket: LoadTicket, reason: impl Into<String>) {
        self.controller
            .on_media_outcome(ticket, Err(MediaLoadError::new(reason)));
    }

    pub fn on_frame(&mut self) -> bool {
        self.controller.on_frame()
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        self.controller.clock_mut()
    }
}

#[must_use]
pub fn viewer_key(key: &Key) -> ViewerKey {
    match key {
        Key::ArrowLeft => ViewerKey::ArrowLeft,
        Key::ArrowRight => ViewerKey::ArrowRight,
        Key::Escape => ViewerKey::Escape,
        _ => ViewerKey::Other,
    }
}
