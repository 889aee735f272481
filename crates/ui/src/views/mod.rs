mod state;
mod stories;
mod viewer;

#[cfg(test)]
mod view_smoke;

pub use state::{ViewError, ViewState, view_state_from_resource};
pub use stories::{StoriesFeed, StoriesView, ThumbnailRow};
pub use viewer::StoryViewer;
