mod thumbnail_vm;
mod viewer_vm;

pub use thumbnail_vm::{ThumbnailVm, map_thumbnails};
pub use viewer_vm::{DisplayState, MediaFrame, ViewerFrame, ViewerVm, viewer_key};
