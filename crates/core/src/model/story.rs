use thiserror::Error;

use crate::model::MediaRef;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoryError {
    #[error("user '{display_name}' has no story items")]
    NoItems { display_name: String },
}

/// One piece of time-boxed media in a user's story sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryItem {
    media: MediaRef,
}

impl StoryItem {
    #[must_use]
    pub fn new(media: MediaRef) -> Self {
        Self { media }
    }

    #[must_use]
    pub fn media(&self) -> &MediaRef {
        &self.media
    }
}

/// A user and their ordered story items. Always holds at least one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStories {
    display_name: String,
    thumbnail: Option<MediaRef>,
    items: Vec<StoryItem>,
}

impl UserStories {
    /// # Errors
    ///
    /// Returns `StoryError::NoItems` if `items` is empty.
    pub fn new(
        display_name: impl Into<String>,
        thumbnail: Option<MediaRef>,
        items: Vec<StoryItem>,
    ) -> Result<Self, StoryError> {
        let display_name = display_name.into();
        if items.is_empty() {
            return Err(StoryError::NoItems { display_name });
        }
        Ok(Self {
            display_name,
            thumbnail,
            items,
        })
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn thumbnail(&self) -> Option<&MediaRef> {
        self.thumbnail.as_ref()
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&StoryItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Index of the final item; the constructor guarantees one exists.
    #[must_use]
    pub fn last_item_index(&self) -> usize {
        self.items.len() - 1
    }
}

/// Ordered, immutable set of users loaded once before the viewer first opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryCollection {
    users: Vec<UserStories>,
}

impl StoryCollection {
    #[must_use]
    pub fn new(users: Vec<UserStories>) -> Self {
        Self { users }
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[must_use]
    pub fn user(&self, index: usize) -> Option<&UserStories> {
        self.users.get(index)
    }

    #[must_use]
    pub fn item_count(&self, user_index: usize) -> Option<usize> {
        self.user(user_index).map(UserStories::item_count)
    }

    #[must_use]
    pub fn item(&self, user_index: usize, item_index: usize) -> Option<&StoryItem> {
        self.user(user_index).and_then(|user| user.item(item_index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserStories> {
        self.users.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(raw: &str) -> StoryItem {
        StoryItem::new(MediaRef::parse(raw).unwrap())
    }

    #[test]
    fn user_requires_items() {
        let err = UserStories::new("Ana", None, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            StoryError::NoItems {
                display_name: "Ana".into()
            }
        );
    }

    #[test]
    fn collection_queries() {
        let ana = UserStories::new("Ana", None, vec![item("a1.jpg"), item("a2.jpg")]).unwrap();
        let ben = UserStories::new("Ben", None, vec![item("b1.jpg")]).unwrap();
        let stories = StoryCollection::new(vec![ana, ben]);

        assert_eq!(stories.user_count(), 2);
        assert_eq!(stories.item_count(0), Some(2));
        assert_eq!(stories.item_count(2), None);
        assert_eq!(stories.item(1, 0).map(|i| i.media().to_string()), Some("b1.jpg".into()));
        assert!(stories.item(1, 1).is_none());
        assert_eq!(stories.user(0).map(UserStories::last_item_index), Some(1));
    }
}
