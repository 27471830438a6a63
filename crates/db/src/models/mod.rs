//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) where the entity supports patches

pub mod admin;
pub mod auth_token;
pub mod perfume;
pub mod setting;
