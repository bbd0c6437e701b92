use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError, VideoTitle, YoutubeCode};
use crate::domain::video::{
    CategorizedVideo as DomainCategorizedVideo, NewVideo as DomainNewVideo, Video as DomainVideo,
    VideoPatch,
};

/// Diesel model representing the `videos` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::videos)]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub youtube_code: String,
    pub category_id: i32,
    pub is_active: bool,
    pub date_created: NaiveDateTime,
    pub date_last_changed: Option<NaiveDateTime>,
}

/// Insertable form of [`Video`]. New rows always start active with the
/// change timestamp unset.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::videos)]
pub struct NewVideo {
    pub title: String,
    pub youtube_code: String,
    pub category_id: i32,
    pub is_active: bool,
    pub date_created: NaiveDateTime,
}

/// Changeset merging a partial update onto an existing row. Diesel skips
/// `None` fields, so absent fields are left untouched.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::videos)]
pub struct VideoChangeset {
    pub title: Option<String>,
    pub youtube_code: Option<String>,
    pub category_id: Option<i32>,
    pub date_last_changed: NaiveDateTime,
}

impl VideoChangeset {
    /// Expand a domain patch into a changeset stamped with the given change
    /// time.
    pub fn from_patch(patch: VideoPatch, changed_at: NaiveDateTime) -> Self {
        Self {
            title: patch.title.map(VideoTitle::into_inner),
            youtube_code: patch.youtube_code.map(YoutubeCode::into_inner),
            category_id: patch.category_id.map(CategoryId::get),
            date_last_changed: changed_at,
        }
    }
}

/// Row shape of the categorized listing query.
#[derive(Debug, Clone, Queryable)]
pub struct CategorizedVideo {
    pub id: i32,
    pub category: String,
    pub title: String,
    pub youtube_code: String,
}

impl TryFrom<Video> for DomainVideo {
    type Error = TypeConstraintError;

    fn try_from(video: Video) -> Result<Self, Self::Error> {
        Ok(Self {
            id: video.id.try_into()?,
            title: VideoTitle::new(video.title)?,
            youtube_code: YoutubeCode::new(video.youtube_code)?,
            category_id: video.category_id.try_into()?,
            is_active: video.is_active,
            date_created: video.date_created,
            date_last_changed: video.date_last_changed,
        })
    }
}

impl From<DomainNewVideo> for NewVideo {
    fn from(video: DomainNewVideo) -> Self {
        Self {
            title: video.title.into_inner(),
            youtube_code: video.youtube_code.into_inner(),
            category_id: video.category_id.get(),
            is_active: true,
            date_created: video.date_created,
        }
    }
}

impl TryFrom<CategorizedVideo> for DomainCategorizedVideo {
    type Error = TypeConstraintError;

    fn try_from(row: CategorizedVideo) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id.try_into()?,
            category: CategoryName::new(row.category)?,
            title: VideoTitle::new(row.title)?,
            youtube_code: YoutubeCode::new(row.youtube_code)?,
        })
    }
}
