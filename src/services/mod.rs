pub mod categories;
pub mod errors;
pub mod listings;
pub mod videos;

pub use errors::{ServiceError, ServiceResult};
