use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryId, TypeConstraintError, VideoId, VideoTitle, YoutubeCode};
use crate::domain::video::{NewVideo, VideoPatch};

/// Errors raised while converting raw video forms into typed payloads.
#[derive(Debug, Error)]
pub enum VideoFormError {
    #[error("Video form validation failed: {0}")]
    Validation(String),
    #[error("Video form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for VideoFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for VideoFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

#[derive(Deserialize, Validate)]
pub struct AddVideoForm {
    #[validate(length(min = 1, max = 128))]
    pub title: String,
    #[validate(length(min = 4, max = 11))]
    pub youtube_code: String,
    #[validate(range(min = 1))]
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddVideoFormPayload {
    pub title: VideoTitle,
    pub youtube_code: YoutubeCode,
    pub category_id: CategoryId,
}

impl AddVideoFormPayload {
    pub fn into_new_video(self) -> NewVideo {
        NewVideo {
            title: self.title,
            youtube_code: self.youtube_code,
            category_id: self.category_id,
            date_created: Utc::now().naive_utc(),
        }
    }
}

impl TryFrom<AddVideoForm> for AddVideoFormPayload {
    type Error = VideoFormError;

    fn try_from(value: AddVideoForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: VideoTitle::new(value.title)?,
            youtube_code: YoutubeCode::new(value.youtube_code)?,
            category_id: CategoryId::new(value.category_id)?,
        })
    }
}

/// Partial update form. Absent fields are left untouched on the stored
/// record.
#[derive(Deserialize, Validate)]
pub struct UpdateVideoForm {
    #[validate(range(min = 1))]
    pub video_id: i32,
    #[validate(length(min = 1, max = 128))]
    pub title: Option<String>,
    #[validate(length(min = 4, max = 11))]
    pub youtube_code: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVideoFormPayload {
    pub video_id: VideoId,
    pub patch: VideoPatch,
}

impl TryFrom<UpdateVideoForm> for UpdateVideoFormPayload {
    type Error = VideoFormError;

    fn try_from(value: UpdateVideoForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            video_id: VideoId::new(value.video_id)?,
            patch: VideoPatch {
                title: value.title.map(VideoTitle::new).transpose()?,
                youtube_code: value.youtube_code.map(YoutubeCode::new).transpose()?,
                category_id: value.category_id.map(CategoryId::new).transpose()?,
            },
        })
    }
}
