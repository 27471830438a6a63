//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod auth_token_repo;
pub mod perfume_repo;
pub mod setting_repo;

pub use admin_repo::AdminRepo;
pub use auth_token_repo::AuthTokenRepo;
pub use perfume_repo::PerfumeRepo;
pub use setting_repo::SettingRepo;
