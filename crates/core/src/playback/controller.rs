use std::sync::Arc;

use tracing::{debug, warn};

use crate::model::{PlaybackCursor, StoryCollection};
use crate::playback::display::{LoadTicket, MediaDisplay, MediaOutcome, MediaRequest};
use crate::playback::input::{ViewerIntent, ViewerKey};
use crate::playback::progress::{ProgressAdapter, ProgressIndicator};
use crate::playback::settings::PlaybackSettings;
use crate::playback::timer::PlaybackTimer;
use crate::time::Clock;

/// Observable state of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Closed,
    Loading(PlaybackCursor),
    Playing(PlaybackCursor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionPhase {
    Loading(LoadTicket),
    Playing,
}

/// Everything that lives only while the viewer is open.
#[derive(Debug)]
struct PlaybackSession {
    cursor: PlaybackCursor,
    timer: PlaybackTimer,
    phase: SessionPhase,
}

impl PlaybackSession {
    fn create(cursor: PlaybackCursor, settings: &PlaybackSettings) -> Self {
        Self {
            cursor,
            timer: PlaybackTimer::new(settings.story_duration()),
            phase: SessionPhase::Playing,
        }
    }

    fn destroy(mut self) {
        self.timer.cancel();
    }

    #[must_use]
    fn cursor(&self) -> PlaybackCursor {
        self.cursor
    }
}

/// The playback state machine.
///
/// Owns the cursor and the single per-session timer; drives the progress
/// indicator and media display. Fed by three event sources: frame ticks,
/// user intents and media outcomes.
pub struct NavigationController<P, D> {
    stories: Arc<StoryCollection>,
    settings: PlaybackSettings,
    clock: Clock,
    progress: ProgressAdapter<P>,
    display: D,
    session: Option<PlaybackSession>,
    next_ticket: u64,
}

impl<P: ProgressIndicator, D: MediaDisplay> NavigationController<P, D> {
    #[must_use]
    pub fn new(
        stories: Arc<StoryCollection>,
        settings: PlaybackSettings,
        progress: P,
        display: D,
    ) -> Self {
        Self {
            stories,
            settings,
            clock: Clock::default(),
            progress: ProgressAdapter::new(progress),
            display,
            session: None,
            next_ticket: 0,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        match &self.session {
            None => PlaybackState::Closed,
            Some(session) => match session.phase {
                SessionPhase::Loading(_) => PlaybackState::Loading(session.cursor),
                SessionPhase::Playing => PlaybackState::Playing(session.cursor),
            },
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<PlaybackCursor> {
        self.session.as_ref().map(PlaybackSession::cursor)
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.timer.is_running())
    }

    #[must_use]
    pub fn stories(&self) -> &StoryCollection {
        &self.stories
    }

    #[must_use]
    pub fn progress(&self) -> &P {
        self.progress.indicator()
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    pub fn dispatch(&mut self, intent: ViewerIntent) {
        match intent {
            ViewerIntent::Open { user_index } => self.open_user(user_index, 0),
            ViewerIntent::Next => self.advance_or_finish(),
            ViewerIntent::Previous => self.retreat(),
            ViewerIntent::Close => self.close(),
        }
    }

    /// Keyboard input only counts while the viewer is open.
    pub fn handle_key(&mut self, key: ViewerKey) {
        if !self.is_open() {
            return;
        }
        if let Some(intent) = key.intent() {
            self.dispatch(intent);
        }
    }

    /// Open `user_index` at `item_index`. Out-of-range users are ignored.
    pub fn open_user(&mut self, user_index: usize, item_index: usize) {
        let Some(item_count) = self.stories.item_count(user_index) else {
            return;
        };
        let cursor = PlaybackCursor::new(user_index, item_index);
        match self.session.as_mut() {
            Some(session) => {
                session.timer.cancel();
                session.cursor = cursor;
            }
            None => {
                debug!(%cursor, "opening story viewer");
                self.session = Some(PlaybackSession::create(cursor, &self.settings));
            }
        }
        self.progress.reset(item_count);
        self.display.set_visible(true);
        self.load_current_item();
    }

    /// Request the media under the cursor, or move past an exhausted user.
    pub fn load_current_item(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.timer.cancel();
        let cursor = session.cursor;

        let Some(item) = self.stories.item(cursor.user_index, cursor.item_index) else {
            if cursor.user_index + 1 < self.stories.user_count() {
                self.open_user(cursor.user_index + 1, 0);
            } else {
                self.close();
            }
            return;
        };

        let ticket = LoadTicket::new(self.next_ticket);
        self.next_ticket += 1;
        session.phase = SessionPhase::Loading(ticket);

        let request = MediaRequest {
            ticket,
            cursor,
            media: item.media().clone(),
        };
        self.progress.update(cursor.item_index, 0.0);
        self.display.show(request);
    }

    /// Resume after a media request finishes.
    ///
    /// Outcomes for anything but the pending request are ignored.
    pub fn on_media_outcome(&mut self, ticket: LoadTicket, outcome: MediaOutcome) {
        let now = self.clock.now();
        let Some(session) = self.session.as_mut() else {
            debug!(ticket = ticket.value(), "media outcome after close ignored");
            return;
        };
        if session.phase != SessionPhase::Loading(ticket) {
            debug!(ticket = ticket.value(), "stale media outcome ignored");
            return;
        }

        let cursor = session.cursor;
        match outcome {
            Ok(()) => {
                session.phase = SessionPhase::Playing;
                session.timer.cancel();
                session.timer.start(now);
                self.progress.update(cursor.item_index, 0.0);
            }
            Err(err) => {
                warn!(
                    user = cursor.user_index,
                    item = cursor.item_index,
                    reason = err.reason(),
                    "story item failed to load, skipping"
                );
                self.advance_or_finish();
            }
        }
    }

    /// Sample the timer. Returns whether a timer was running.
    pub fn on_frame(&mut self) -> bool {
        let now = self.clock.now();
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(tick) = session.timer.tick(now) else {
            return false;
        };
        let active = session.cursor.item_index;
        self.progress.update(active, tick.percent);
        if tick.expired {
            self.advance_or_finish();
        }
        true
    }

    /// Next item, else next user, else close.
    pub fn advance_or_finish(&mut self) {
        let Some(cursor) = self.cursor() else {
            return;
        };
        let item_count = self.stories.item_count(cursor.user_index).unwrap_or(0);

        if cursor.item_index + 1 < item_count {
            self.move_to_item(cursor.item_index + 1);
        } else if cursor.user_index + 1 < self.stories.user_count() {
            self.open_user(cursor.user_index + 1, 0);
        } else {
            debug!(%cursor, "stories exhausted");
            self.close();
        }
    }

    /// Previous item, else the previous user's last item, else nothing.
    pub fn retreat(&mut self) {
        let Some(cursor) = self.cursor() else {
            return;
        };

        if cursor.item_index > 0 {
            self.move_to_item(cursor.item_index - 1);
        } else if cursor.user_index > 0 {
            let previous = cursor.user_index - 1;
            let last = self
                .stories
                .user(previous)
                .map_or(0, |user| user.last_item_index());
            self.open_user(previous, last);
        }
    }

    /// Hide the viewer and drop the session. Safe to repeat.
    pub fn close(&mut self) {
        self.display.set_visible(false);
        self.display.clear();
        if let Some(session) = self.session.take() {
            debug!(cursor = %session.cursor, "closing story viewer");
            session.destroy();
        }
        self.progress.clear();
    }

    fn move_to_item(&mut self, item_index: usize) {
        if let Some(session) = self.session.as_mut() {
            session.cursor.item_index = item_index;
        }
        self.load_current_item();
    }
}
