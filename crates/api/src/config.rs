/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development except
/// the seed password, which is opt-in. In production, override via
/// environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Principal name assumed when a login request omits `name`, and used
    /// when seeding the first admin.
    pub default_admin_name: String,
    /// When set and the admin table is empty, a staff + superuser principal
    /// named `default_admin_name` is created at startup with this password.
    pub seed_admin_password: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_NAME`           | `Top Notes Admin`          |
    /// | `ADMIN_PASSWORD`       | unset (no seeding)         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let default_admin_name =
            std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Top Notes Admin".into());

        let seed_admin_password = std::env::var("ADMIN_PASSWORD").ok();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            default_admin_name,
            seed_admin_password,
        }
    }
}
