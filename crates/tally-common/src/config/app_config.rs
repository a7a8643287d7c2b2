//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use tally_core::{CooldownScope, DisplayCasing, DEFAULT_TIMEZONE};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub storage: StorageConfig,
    /// Present when the storage backend is PostgreSQL
    pub database: Option<DatabaseConfig>,
    /// Present when cooldowns are kept in Redis
    pub redis: Option<RedisConfig>,
    pub voting: VotingConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(format!("unknown environment: {s}")),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which engine keeps the tallies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process memory only; state is lost on restart
    #[default]
    Memory,
    /// Process memory mirrored to a JSON snapshot file after every change
    File,
    /// PostgreSQL tables
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(format!("unknown storage backend: {s}")),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Snapshot path for the file backend
    pub file_path: String,
    /// Upper bound for a single store call
    pub timeout_ms: u64,
}

impl StorageConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Vote handling rules
#[derive(Debug, Clone)]
pub struct VotingConfig {
    pub cooldown_ms: u64,
    pub cooldown_scope: CooldownScope,
    pub display_casing: DisplayCasing,
    /// Zone that decides where one voting day ends and the next begins
    pub timezone: Tz,
}

impl VotingConfig {
    #[must_use]
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            cooldown_scope: CooldownScope::default(),
            display_casing: DisplayCasing::default(),
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "tally-server".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_file_path() -> String {
    "./data.json".to_string()
}

fn default_storage_timeout_ms() -> u64 {
    5000
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_cooldown_ms() -> u64 {
    60_000
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let backend = vars.parse_or("STORAGE_BACKEND", StorageBackend::default)?;

        let database = match vars.get("DATABASE_URL") {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: vars
                    .parse_or("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: vars
                    .parse_or("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
            }),
            None if backend == StorageBackend::Postgres => {
                return Err(ConfigError::MissingVar("DATABASE_URL"));
            }
            None => None,
        };

        let redis = match vars.get("REDIS_URL") {
            Some(url) => Some(RedisConfig {
                url,
                max_connections: vars
                    .parse_or("REDIS_MAX_CONNECTIONS", default_redis_max_connections)?,
            }),
            None => None,
        };

        let port = match vars.get("API_PORT") {
            Some(_) => vars.parse_or("API_PORT", default_port)?,
            None => vars.parse_or("PORT", default_port)?,
        };

        Ok(Self {
            app: AppSettings {
                name: vars.get("APP_NAME").unwrap_or_else(default_app_name),
                env: vars.parse_or("APP_ENV", Environment::default)?,
            },
            api: ServerConfig {
                host: vars.get("API_HOST").unwrap_or_else(default_host),
                port,
            },
            storage: StorageConfig {
                backend,
                file_path: vars.get("STORAGE_FILE").unwrap_or_else(default_file_path),
                timeout_ms: vars.parse_or("STORAGE_TIMEOUT_MS", default_storage_timeout_ms)?,
            },
            database,
            redis,
            voting: VotingConfig {
                cooldown_ms: vars.parse_or("VOTE_COOLDOWN_MS", default_cooldown_ms)?,
                cooldown_scope: vars.parse_or("VOTE_COOLDOWN_SCOPE", CooldownScope::default)?,
                display_casing: vars.parse_or("VOTE_DISPLAY_CASING", DisplayCasing::default)?,
                timezone: vars.parse_or("VOTE_TIMEZONE", || DEFAULT_TIMEZONE)?,
            },
            cors: CorsConfig {
                allowed_origins: vars
                    .get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Variable source with blank values treated as unset
struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_or<T, D>(&self, key: &'static str, default: D) -> Result<T, ConfigError>
    where
        T: FromStr,
        D: FnOnce() -> T,
    {
        match self.get(key) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw)),
            None => Ok(default()),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_defaults_from_empty_environment() {
        let config = load(&[]).unwrap();

        assert_eq!(config.app.name, "tally-server");
        assert_eq!(config.app.env, Environment::Development);
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.timeout(), Duration::from_secs(5));
        assert!(config.database.is_none());
        assert!(config.redis.is_none());
        assert_eq!(config.voting.cooldown(), Duration::from_secs(60));
        assert_eq!(config.voting.cooldown_scope, CooldownScope::Keyword);
        assert_eq!(config.voting.display_casing, DisplayCasing::Exact);
        assert_eq!(config.voting.timezone, DEFAULT_TIMEZONE);
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = load(&[("STORAGE_BACKEND", "postgres")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));

        let config = load(&[
            ("STORAGE_BACKEND", "postgres"),
            ("DATABASE_URL", "postgres://localhost/votes"),
        ])
        .unwrap();
        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://localhost/votes");
        assert_eq!(database.max_connections, 20);
    }

    #[test]
    fn test_port_fallback() {
        assert_eq!(load(&[("PORT", "8081")]).unwrap().api.port, 8081);
        assert_eq!(
            load(&[("PORT", "8081"), ("API_PORT", "9000")]).unwrap().api.port,
            9000
        );
    }

    #[test]
    fn test_voting_overrides() {
        let config = load(&[
            ("VOTE_COOLDOWN_MS", "1500"),
            ("VOTE_COOLDOWN_SCOPE", "voter"),
            ("VOTE_DISPLAY_CASING", "capitalize"),
            ("VOTE_TIMEZONE", "UTC"),
        ])
        .unwrap();

        assert_eq!(config.voting.cooldown(), Duration::from_millis(1500));
        assert_eq!(config.voting.cooldown_scope, CooldownScope::Voter);
        assert_eq!(config.voting.display_casing, DisplayCasing::Capitalize);
        assert_eq!(config.voting.timezone, chrono_tz::UTC);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = load(&[("VOTE_TIMEZONE", "Mars/Olympus")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("VOTE_TIMEZONE", _)));

        let err = load(&[("API_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("API_PORT", _)));
    }

    #[test]
    fn test_cors_origins() {
        let config = load(&[("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example")])
            .unwrap();
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }
}
