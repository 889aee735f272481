use std::time::Duration;

use thiserror::Error;

/// How long each story item stays on screen.
pub const STORY_DURATION: Duration = Duration::from_millis(5_000);

/// Target spacing of progress ticks, roughly one display refresh.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("story duration must be greater than zero")]
    ZeroStoryDuration,
    #[error("frame interval must be greater than zero")]
    ZeroFrameInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    story_duration: Duration,
    frame_interval: Duration,
}

impl PlaybackSettings {
    /// # Errors
    ///
    /// Returns `SettingsError` if either duration is zero.
    pub fn new(story_duration: Duration, frame_interval: Duration) -> Result<Self, SettingsError> {
        if story_duration.is_zero() {
            return Err(SettingsError::ZeroStoryDuration);
        }
        if frame_interval.is_zero() {
            return Err(SettingsError::ZeroFrameInterval);
        }
        Ok(Self {
            story_duration,
            frame_interval,
        })
    }

    /// # Errors
    ///
    /// Returns `SettingsError::ZeroStoryDuration` for a zero duration.
    pub fn with_story_duration(self, story_duration: Duration) -> Result<Self, SettingsError> {
        Self::new(story_duration, self.frame_interval)
    }

    #[must_use]
    pub fn story_duration(&self) -> Duration {
        self.story_duration
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            story_duration: STORY_DURATION,
            frame_interval: FRAME_INTERVAL,
        }
    }
}
