use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::video::{CategorizedVideo, Video};

/// Full video record including soft-delete bookkeeping.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoDto {
    pub id: i32,
    pub title: String,
    pub youtube_code: String,
    pub category_id: i32,
    pub is_active: bool,
    pub date_created: NaiveDateTime,
    pub date_last_changed: Option<NaiveDateTime>,
}

/// User-supplied fields of a video, without the internal bookkeeping.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoBaseDto {
    pub title: String,
    pub youtube_code: String,
    pub category_id: i32,
}

/// Row of the categorized listing view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorizedVideoDto {
    pub id: i32,
    pub category: String,
    pub title: String,
    pub youtube_code: String,
}

impl From<Video> for VideoDto {
    fn from(value: Video) -> Self {
        Self {
            id: value.id.get(),
            title: value.title.into_inner(),
            youtube_code: value.youtube_code.into_inner(),
            category_id: value.category_id.get(),
            is_active: value.is_active,
            date_created: value.date_created,
            date_last_changed: value.date_last_changed,
        }
    }
}

impl From<Video> for VideoBaseDto {
    fn from(value: Video) -> Self {
        Self {
            title: value.title.into_inner(),
            youtube_code: value.youtube_code.into_inner(),
            category_id: value.category_id.get(),
        }
    }
}

impl From<CategorizedVideo> for CategorizedVideoDto {
    fn from(value: CategorizedVideo) -> Self {
        Self {
            id: value.id.get(),
            category: value.category.into_inner(),
            title: value.title.into_inner(),
            youtube_code: value.youtube_code.into_inner(),
        }
    }
}
