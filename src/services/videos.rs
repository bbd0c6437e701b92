//! Video operations: create, soft-delete, restore, list, get and partial
//! update.
//!
//! Soft deletion flips `is_active` instead of removing rows; inactive videos
//! are hidden from every read path but stay in storage. Delete requires an
//! active video (a missing id and an already-inactive one are
//! indistinguishable), while restore only requires the row to exist.

use crate::domain::types::VideoId;
use crate::dto::acks::{DeletionAck, RestorationAck};
use crate::dto::videos::{VideoBaseDto, VideoDto};
use crate::forms::videos::{AddVideoFormPayload, UpdateVideoFormPayload};
use crate::repository::{CategoryReader, VideoReader, VideoWriter};

use super::{ServiceError, ServiceResult};

pub fn add_video<R>(payload: AddVideoFormPayload, repo: &R) -> ServiceResult<VideoDto>
where
    R: CategoryReader + VideoWriter,
{
    match repo.category_exists(payload.category_id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to check category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.create_video(&payload.into_new_video()) {
        Ok(video) => Ok(VideoDto::from(video)),
        Err(e) => {
            log::error!("Failed to create video: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_video<R>(video_id: VideoId, repo: &R) -> ServiceResult<DeletionAck>
where
    R: VideoReader + VideoWriter,
{
    match repo.video_is_active(video_id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to check video: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.set_video_active(video_id, false) {
        Ok(_) => Ok(DeletionAck::from(video_id)),
        Err(e) => {
            log::error!("Failed to soft-delete video: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Restoring an already-active video is a no-op success; only a missing row
/// is rejected.
pub fn restore_video<R>(video_id: VideoId, repo: &R) -> ServiceResult<RestorationAck>
where
    R: VideoReader + VideoWriter,
{
    match repo.get_video_by_id(video_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get video: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.set_video_active(video_id, true) {
        Ok(_) => Ok(RestorationAck::from(video_id)),
        Err(e) => {
            log::error!("Failed to restore video: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn show_videos<R>(repo: &R) -> ServiceResult<Vec<VideoDto>>
where
    R: VideoReader,
{
    match repo.list_active_videos() {
        Ok(videos) => Ok(videos.into_iter().map(VideoDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list videos: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_video<R>(video_id: VideoId, repo: &R) -> ServiceResult<VideoBaseDto>
where
    R: VideoReader,
{
    match repo.video_is_active(video_id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to check video: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.get_video_by_id(video_id) {
        Ok(Some(video)) => Ok(VideoBaseDto::from(video)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get video: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Like get, the response carries the user-supplied fields only; the
/// bookkeeping fields stay internal.
pub fn update_video<R>(payload: UpdateVideoFormPayload, repo: &R) -> ServiceResult<VideoBaseDto>
where
    R: CategoryReader + VideoReader + VideoWriter,
{
    match repo.video_is_active(payload.video_id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to check video: {e}");
            return Err(ServiceError::Internal);
        }
    }

    if let Some(category_id) = payload.patch.category_id {
        match repo.category_exists(category_id) {
            Ok(true) => {}
            Ok(false) => return Err(ServiceError::NotFound),
            Err(e) => {
                log::error!("Failed to check category: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    match repo.update_video(payload.video_id, &payload.patch) {
        Ok(video) => Ok(VideoBaseDto::from(video)),
        Err(e) => {
            log::error!("Failed to update video: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{CategoryId, CategoryName, VideoTitle, YoutubeCode};
    use crate::domain::video::{Video, VideoPatch};
    use crate::forms::videos::AddVideoForm;
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
        }
    }

    fn sample_video(id: i32, title: &str, is_active: bool) -> Video {
        Video {
            id: VideoId::new(id).unwrap(),
            title: VideoTitle::new(title).unwrap(),
            youtube_code: YoutubeCode::new("abc1234").unwrap(),
            category_id: CategoryId::new(1).unwrap(),
            is_active,
            date_created: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            date_last_changed: None,
        }
    }

    fn add_payload(title: &str, category_id: i32) -> AddVideoFormPayload {
        AddVideoForm {
            title: title.to_string(),
            youtube_code: "abc1234".to_string(),
            category_id,
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn adds_video_with_fresh_bookkeeping() {
        let repo = TestRepository::default().with_categories(vec![sample_category(1, "Tech")]);

        let created = add_video(add_payload("Intro", 1), &repo).unwrap();
        assert_eq!(created.id, 1);
        assert!(created.is_active);
        assert!(created.date_last_changed.is_none());
    }

    #[test]
    fn add_video_requires_existing_category() {
        let repo = TestRepository::default();

        let err = add_video(add_payload("Intro", 42), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let repo = TestRepository::default()
            .with_categories(vec![sample_category(1, "Tech")])
            .with_videos(vec![sample_video(1, "Intro", true)]);
        let id = VideoId::new(1).unwrap();

        let ack = delete_video(id, &repo).unwrap();
        assert_eq!(ack.deleted, 1);

        let err = get_video(id, &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn second_delete_is_not_found() {
        let repo = TestRepository::default().with_videos(vec![sample_video(1, "Intro", true)]);
        let id = VideoId::new(1).unwrap();

        delete_video(id, &repo).unwrap();
        let err = delete_video(id, &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn restore_brings_video_back() {
        let repo = TestRepository::default().with_videos(vec![sample_video(1, "Intro", false)]);
        let id = VideoId::new(1).unwrap();

        let ack = restore_video(id, &repo).unwrap();
        assert_eq!(ack.restored, 1);

        let fetched = get_video(id, &repo).unwrap();
        assert_eq!(fetched.title, "Intro");
    }

    #[test]
    fn restore_of_active_video_is_noop_success() {
        let repo = TestRepository::default().with_videos(vec![sample_video(1, "Intro", true)]);

        assert!(restore_video(VideoId::new(1).unwrap(), &repo).is_ok());
    }

    #[test]
    fn restore_of_missing_video_is_not_found() {
        let repo = TestRepository::default();

        let err = restore_video(VideoId::new(99).unwrap(), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn listing_excludes_inactive_and_sorts_by_title() {
        let repo = TestRepository::default().with_videos(vec![
            sample_video(1, "Zebra", true),
            sample_video(2, "Alpha", true),
            sample_video(3, "Hidden", false),
        ]);

        let videos = show_videos(&repo).unwrap();
        let titles: Vec<&str> = videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Zebra"]);
    }

    #[test]
    fn get_returns_base_fields_only() {
        let repo = TestRepository::default().with_videos(vec![sample_video(1, "Intro", true)]);

        let video = get_video(VideoId::new(1).unwrap(), &repo).unwrap();
        assert_eq!(video.title, "Intro");
        assert_eq!(video.youtube_code, "abc1234");
        assert_eq!(video.category_id, 1);
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let repo = TestRepository::default()
            .with_categories(vec![sample_category(1, "Tech")])
            .with_videos(vec![sample_video(1, "Intro", true)]);

        let payload = UpdateVideoFormPayload {
            video_id: VideoId::new(1).unwrap(),
            patch: VideoPatch {
                title: Some(VideoTitle::new("Renamed").unwrap()),
                youtube_code: None,
                category_id: None,
            },
        };

        let updated = update_video(payload, &repo).unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.youtube_code, "abc1234");
        assert_eq!(updated.category_id, 1);
    }

    #[test]
    fn update_response_carries_base_fields_only() {
        let repo = TestRepository::default()
            .with_categories(vec![sample_category(1, "Tech")])
            .with_videos(vec![sample_video(1, "Intro", true)]);

        let payload = UpdateVideoFormPayload {
            video_id: VideoId::new(1).unwrap(),
            patch: VideoPatch {
                title: Some(VideoTitle::new("Renamed").unwrap()),
                youtube_code: None,
                category_id: None,
            },
        };

        let updated = update_video(payload, &repo).unwrap();
        assert_eq!(
            updated,
            VideoBaseDto {
                title: "Renamed".to_string(),
                youtube_code: "abc1234".to_string(),
                category_id: 1,
            }
        );

        // The change timestamp is still stamped on the stored record.
        let stored = repo.get_video_by_id(VideoId::new(1).unwrap()).unwrap();
        assert!(stored.unwrap().date_last_changed.is_some());
    }

    #[test]
    fn update_rejects_unknown_category() {
        let repo = TestRepository::default().with_videos(vec![sample_video(1, "Intro", true)]);

        let payload = UpdateVideoFormPayload {
            video_id: VideoId::new(1).unwrap(),
            patch: VideoPatch {
                title: None,
                youtube_code: None,
                category_id: Some(CategoryId::new(42).unwrap()),
            },
        };

        let err = update_video(payload, &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn update_of_inactive_video_is_not_found() {
        let repo = TestRepository::default().with_videos(vec![sample_video(1, "Intro", false)]);

        let payload = UpdateVideoFormPayload {
            video_id: VideoId::new(1).unwrap(),
            patch: VideoPatch::default(),
        };

        let err = update_video(payload, &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }
}
