/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Database connection string (default: embedded SQLite file).
    pub database_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session lifetime in days (default: `7`).
    pub session_expiry_days: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default               |
    /// |------------------------|-----------------------|
    /// | `HOST`                 | `0.0.0.0`             |
    /// | `PORT`                 | `3000`                |
    /// | `DATABASE_URL`         | `sqlite://basket.db`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                  |
    /// | `SESSION_EXPIRY_DAYS`  | `7`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://basket.db".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_expiry_days: i64 = std::env::var("SESSION_EXPIRY_DAYS")
            .unwrap_or_else(|_| "7".into())
            .parse()
            .expect("SESSION_EXPIRY_DAYS must be a valid i64");

        Self {
            host,
            port,
            database_url,
            request_timeout_secs,
            session_expiry_days,
        }
    }
}
