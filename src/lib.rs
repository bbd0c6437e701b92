//! Core library exports for the video catalog service.
//!
//! This crate exposes the domain model, Diesel persistence layer, forms and
//! service layers of a small category/video catalog with soft-delete
//! semantics. HTTP routing and template rendering live in consumers of this
//! crate.

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
