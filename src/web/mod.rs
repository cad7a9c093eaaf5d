//! Web layer: askama templates, view models and page handlers.

pub mod handlers;
pub mod view_models;
