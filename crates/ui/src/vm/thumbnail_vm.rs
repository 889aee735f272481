use stories_core::model::StoryCollection;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbnailVm {
    pub user_index: usize,
    pub name: String,
    pub src: Option<String>,
    pub alt: String,
    pub avatar: String,
    pub count_label: String,
}

#[must_use]
pub fn map_thumbnails(stories: &StoryCollection) -> Vec<ThumbnailVm> {
    stories
        .iter()
        .enumerate()
        .map(|(user_index, user)| {
            let name = user.display_name().to_string();
            let avatar = name
                .chars()
                .next()
                .map_or_else(|| "?".to_string(), |ch| ch.to_uppercase().to_string());
            let count_label = match user.item_count() {
                1 => "1 story".to_string(),
                n => format!("{n} stories"),
            };
            ThumbnailVm {
                user_index,
                src: user.thumbnail().map(ToString::to_string),
                alt: format!("{name}'s stories"),
                name,
                avatar,
                count_label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use stories_core::model::{MediaRef, StoryItem, UserStories};

    use super::*;

    #[test]
    fn maps_users_in_order_with_fallback_avatar() {
        let item = || StoryItem::new(MediaRef::parse("a.jpg").unwrap());
        let ana = UserStories::new(
            "ana",
            Some(MediaRef::parse("ana.png").unwrap()),
            vec![item(), item()],
        )
        .unwrap();
        let ben = UserStories::new("ben", None, vec![item()]).unwrap();

        let thumbs = map_thumbnails(&StoryCollection::new(vec![ana, ben]));
        assert_eq!(thumbs.len(), 2);
        assert_eq!(thumbs[0].src.as_deref(), Some("ana.png"));
        assert_eq!(thumbs[0].count_label, "2 stories");
        assert_eq!(thumbs[1].user_index, 1);
        assert_eq!(thumbs[1].src, None);
        assert_eq!(thumbs[1].avatar, "B");
        assert_eq!(thumbs[1].count_label, "1 story");
        assert_eq!(thumbs[1].alt, "ben's stories");
    }
}
