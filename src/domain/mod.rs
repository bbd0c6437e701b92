pub mod category;
pub mod types;
pub mod video;
