use taskboard_ai::AiConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In
/// production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed frontend origins, parsed from comma-separated
    /// `FRONTEND_ORIGIN`. The single entry `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection string.
    pub database_url: String,
    /// AI gateway credential, model and endpoint.
    pub ai: AiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                        |
    /// |------------------------|--------------------------------|
    /// | `HOST`                 | `0.0.0.0`                      |
    /// | `PORT`                 | `5000`                         |
    /// | `FRONTEND_ORIGIN`      | `*` (any origin)               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                           |
    /// | `DATABASE_URL`         | `sqlite:taskboard.db?mode=rwc` |
    ///
    /// AI variables are documented on [`AiConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("FRONTEND_ORIGIN")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:taskboard.db?mode=rwc".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            ai: AiConfig::from_env(),
        }
    }

    /// Whether CORS should allow any origin.
    pub fn allow_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}
