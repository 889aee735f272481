use thiserror::Error;

use crate::model::{MediaRef, PlaybackCursor};

/// Identifies one media request so late outcomes can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRequest {
    pub ticket: LoadTicket,
    pub cursor: PlaybackCursor,
    pub media: MediaRef,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("media failed to load: {reason}")]
pub struct MediaLoadError {
    reason: String,
}

impl MediaLoadError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result of a media request: ready to show, or failed.
pub type MediaOutcome = Result<(), MediaLoadError>;

/// Where story media is shown.
///
/// `show` only starts a load. Its outcome must be reported afterwards, exactly
/// once, through `NavigationController::on_media_outcome` with the request's
/// ticket.
pub trait MediaDisplay {
    fn set_visible(&mut self, visible: bool);

    /// Drop the current media and begin loading `request.media`.
    fn show(&mut self, request: MediaRequest);

    fn clear(&mut self);
}
