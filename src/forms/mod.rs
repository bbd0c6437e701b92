pub mod categories;
pub mod videos;
