use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, VideoId};
use crate::domain::video::{CategorizedVideo, NewVideo, Video, VideoPatch};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod video;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between callers. Each method checks one
/// connection out of the pool for its own duration.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name ascending.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// True iff a category with that id exists.
    fn category_exists(&self, id: CategoryId) -> RepositoryResult<bool>;
    /// True iff any category currently has exactly that name.
    fn category_name_taken(&self, name: &str) -> RepositoryResult<bool>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category, returning the stored record with its id.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Overwrite a category's name, returning the updated record.
    fn update_category(&self, id: CategoryId, name: &str) -> RepositoryResult<Category>;
    /// Hard-delete a category row, returning the number of affected rows.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for video entities.
pub trait VideoReader {
    /// List active videos ordered by title ascending.
    fn list_active_videos(&self) -> RepositoryResult<Vec<Video>>;
    /// Retrieve a video by its identifier regardless of activity.
    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>>;
    /// True iff a video with that id exists and is active.
    fn video_is_active(&self, id: VideoId) -> RepositoryResult<bool>;
    /// Number of active videos referencing the category.
    fn count_active_videos_in_category(&self, category_id: CategoryId) -> RepositoryResult<i64>;
    /// Active videos joined with their category name, ordered by category
    /// name then title.
    fn list_categorized_videos(&self) -> RepositoryResult<Vec<CategorizedVideo>>;
}

/// Write operations for video entities.
pub trait VideoWriter {
    /// Persist a new video, returning the stored record with its id.
    fn create_video(&self, video: &NewVideo) -> RepositoryResult<Video>;
    /// Merge a partial update onto an existing video and stamp its change
    /// time, returning the updated record.
    fn update_video(&self, id: VideoId, patch: &VideoPatch) -> RepositoryResult<Video>;
    /// Flip the soft-delete flag and stamp the change time, returning the
    /// number of affected rows.
    fn set_video_active(&self, id: VideoId, is_active: bool) -> RepositoryResult<usize>;
}
