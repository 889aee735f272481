#![forbid(unsafe_code)]

pub mod error;
pub mod feed_service;
pub mod remote_source;

pub use error::{FeedError, RemoteSourceError};
pub use feed_service::{StoryFeedService, build_collection, source_from_location};
pub use remote_source::RemoteStorySource;
