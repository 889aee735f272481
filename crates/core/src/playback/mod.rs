//! The playback core: timer, progress, media display seam and the
//! navigation state machine that ties them together.

mod controller;
mod display;
mod input;
mod progress;
mod settings;
mod timer;

pub use controller::{NavigationController, PlaybackState};
pub use display::{LoadTicket, MediaDisplay, MediaLoadError, MediaOutcome, MediaRequest};
pub use input::{ViewerIntent, ViewerKey};
pub use progress::{ProgressAdapter, ProgressIndicator, SegmentFills};
pub use settings::{FRAME_INTERVAL, PlaybackSettings, STORY_DURATION, SettingsError};
pub use timer::{PlaybackTimer, TimerTick, progress_percent};
