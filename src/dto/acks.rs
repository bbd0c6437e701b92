use serde::Serialize;

use crate::domain::types::{CategoryId, VideoId};

/// Acknowledgment returned by delete operations, serialized as
/// `{"Deleted": <id>}`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DeletionAck {
    #[serde(rename = "Deleted")]
    pub deleted: i32,
}

/// Acknowledgment returned by video restore, serialized as
/// `{"Restored": <id>}`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RestorationAck {
    #[serde(rename = "Restored")]
    pub restored: i32,
}

impl From<VideoId> for DeletionAck {
    fn from(value: VideoId) -> Self {
        Self {
            deleted: value.get(),
        }
    }
}

impl From<CategoryId> for DeletionAck {
    fn from(value: CategoryId) -> Self {
        Self {
            deleted: value.get(),
        }
    }
}

impl From<VideoId> for RestorationAck {
    fn from(value: VideoId) -> Self {
        Self {
            restored: value.get(),
        }
    }
}
