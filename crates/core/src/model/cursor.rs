use std::fmt;

/// Position of the viewer: which user, and which of their items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlaybackCursor {
    pub user_index: usize,
    pub item_index: usize,
}

impl PlaybackCursor {
    #[must_use]
    pub const fn new(user_index: usize, item_index: usize) -> Self {
        Self {
            user_index,
            item_index,
        }
    }
}

impl fmt::Display for PlaybackCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.user_index, self.item_index)
    }
}
