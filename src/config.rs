use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_DB_PATH: &str = "sqlite:data/posts.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DB_PATH.to_string(),
            port: DEFAULT_PORT,
            log_level: crate::logging::default_log_level().to_string(),
        }
    }
}

impl Config {
    /// Reads `DATABASE_URL`, `PORT` and `LOG_LEVEL`, keeping the default for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
