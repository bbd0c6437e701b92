use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, VideoId, VideoTitle, YoutubeCode};

/// Canonical video record, including soft-delete bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: VideoId,
    pub title: VideoTitle,
    pub youtube_code: YoutubeCode,
    pub category_id: CategoryId,
    /// False marks the record as soft-deleted.
    pub is_active: bool,
    pub date_created: NaiveDateTime,
    pub date_last_changed: Option<NaiveDateTime>,
}

/// Data required to insert a new [`Video`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVideo {
    pub title: VideoTitle,
    pub youtube_code: YoutubeCode,
    pub category_id: CategoryId,
    pub date_created: NaiveDateTime,
}

/// Partial update of a video's user-supplied fields.
///
/// `None` fields are left untouched by the merge; only the fields that are
/// explicitly present overwrite the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoPatch {
    pub title: Option<VideoTitle>,
    pub youtube_code: Option<YoutubeCode>,
    pub category_id: Option<CategoryId>,
}

/// Denormalized row of the categorized listing: an active video joined with
/// the name of its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorizedVideo {
    pub id: VideoId,
    pub category: CategoryName,
    pub title: VideoTitle,
    pub youtube_code: YoutubeCode,
}
