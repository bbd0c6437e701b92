//! Read-only joined views used for listing pages.

use crate::dto::videos::CategorizedVideoDto;
use crate::repository::VideoReader;

use super::{ServiceError, ServiceResult};

/// Every active video paired with its category name, ordered by category
/// name then title.
pub fn show_categorized_videos<R>(repo: &R) -> ServiceResult<Vec<CategorizedVideoDto>>
where
    R: VideoReader,
{
    match repo.list_categorized_videos() {
        Ok(rows) => Ok(rows.into_iter().map(CategorizedVideoDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categorized videos: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{CategoryId, CategoryName, VideoId, VideoTitle, YoutubeCode};
    use crate::domain::video::Video;
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
        }
    }

    fn video(id: i32, title: &str, category_id: i32, is_active: bool) -> Video {
        Video {
            id: VideoId::new(id).unwrap(),
            title: VideoTitle::new(title).unwrap(),
            youtube_code: YoutubeCode::new("abc1234").unwrap(),
            category_id: CategoryId::new(category_id).unwrap(),
            is_active,
            date_created: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            date_last_changed: None,
        }
    }

    #[test]
    fn joins_active_videos_with_category_names() {
        let repo = TestRepository::default()
            .with_categories(vec![category(1, "Sci")])
            .with_videos(vec![video(1, "V1", 1, true)]);

        let rows = show_categorized_videos(&repo).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].category, "Sci");
        assert_eq!(rows[0].title, "V1");
    }

    #[test]
    fn orders_by_category_then_title_and_hides_inactive() {
        let repo = TestRepository::default()
            .with_categories(vec![category(1, "Zoo"), category(2, "Art")])
            .with_videos(vec![
                video(1, "B", 1, true),
                video(2, "A", 1, true),
                video(3, "C", 2, true),
                video(4, "D", 2, false),
            ]);

        let rows = show_categorized_videos(&repo).unwrap();
        let pairs: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.category.as_str(), r.title.as_str()))
            .collect();
        assert_eq!(pairs, vec![("Art", "C"), ("Zoo", "A"), ("Zoo", "B")]);
    }
}
