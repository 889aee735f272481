/// Something the user asked the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerIntent {
    Open { user_index: usize },
    Next,
    Previous,
    Close,
}

/// Keys the viewer reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl ViewerKey {
    #[must_use]
    pub fn intent(self) -> Option<ViewerIntent> {
        match self {
            ViewerKey::ArrowLeft => Some(ViewerIntent::Previous),
            ViewerKey::ArrowRight => Some(ViewerIntent::Next),
            ViewerKey::Escape => Some(ViewerIntent::Close),
            ViewerKey::Other => None,
        }
    }
}
