//! Category operations: create, list, get, rename and guarded hard-delete.
//!
//! Every mutating operation re-checks its preconditions against the
//! repository before writing, so a rejected call performs no mutation.

use crate::domain::types::CategoryId;
use crate::dto::acks::DeletionAck;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::{AddCategoryFormPayload, UpdateCategoryFormPayload};
use crate::repository::{CategoryReader, CategoryWriter, VideoReader};

use super::{ServiceError, ServiceResult};

pub fn add_category<R>(payload: AddCategoryFormPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.category_name_taken(payload.name.as_str()) {
        Ok(true) => return Err(ServiceError::Forbidden),
        Ok(false) => {}
        Err(e) => {
            log::error!("Failed to check category name: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.create_category(&payload.into_new_category()) {
        Ok(category) => Ok(CategoryDto::from(category)),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_category<R>(category_id: CategoryId, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(CategoryDto::from(category)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrites the name unconditionally; uniqueness is only checked when a
/// category is created.
pub fn update_category<R>(
    payload: UpdateCategoryFormPayload,
    repo: &R,
) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.category_exists(payload.category_id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to check category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.update_category(payload.category_id, payload.name.as_str()) {
        Ok(category) => Ok(CategoryDto::from(category)),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Hard-deletes a category. Blocked while any active video still references
/// it; soft-deleted videos do not count.
pub fn delete_category<R>(category_id: CategoryId, repo: &R) -> ServiceResult<DeletionAck>
where
    R: CategoryReader + CategoryWriter + VideoReader,
{
    match repo.category_exists(category_id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to check category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.count_active_videos_in_category(category_id) {
        Ok(0) => {}
        Ok(_) => return Err(ServiceError::Forbidden),
        Err(e) => {
            log::error!("Failed to count videos in category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_category(category_id) {
        Ok(_) => Ok(DeletionAck::from(category_id)),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}
