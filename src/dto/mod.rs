pub mod acks;
pub mod categories;
pub mod videos;
