mod cursor;
mod media;
mod story;

pub use cursor::PlaybackCursor;
pub use media::{MediaBase, MediaRef, MediaRefError};
pub use story::{StoryCollection, StoryError, StoryItem, UserStories};
