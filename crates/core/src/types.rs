/// Database primary keys for principals and settings are PostgreSQL BIGSERIAL.
/// Catalog records use UUIDs and are typed as `uuid::Uuid` directly.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
