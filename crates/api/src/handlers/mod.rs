//! HTTP handlers, one module per resource.

pub mod admin_perfumes;
pub mod auth;
pub mod catalog;
pub mod settings;
