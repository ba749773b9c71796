/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Legacy variable overriding `storage.mongo_uri`
pub const MONGO_URI_ENV: &str = "MONGO_URI";

/// Legacy variable overriding `server.port`
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_timeouts")]
    pub timeouts: TimeoutSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_mongo_uri")]
    pub mongo_uri: String,

    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_collection")]
    pub collection: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeoutSettings {
    /// Deadline for each store call made by a request handler
    #[serde(default = "default_request_secs")]
    pub request_secs: u64,

    /// Deadline for the startup connect + ping
    #[serde(default = "default_connect_secs")]
    pub connect_secs: u64,
}

impl TimeoutSettings {
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Precedence, lowest first: built-in defaults, `config.toml` (or the
    /// given path), `ROSTER_*` variables, then `MONGO_URI` and `PORT`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_sources(
            path,
            std::env::var(MONGO_URI_ENV).ok(),
            std::env::var(PORT_ENV).ok(),
        )
    }

    fn from_sources(
        path: Option<&Path>,
        mongo_uri: Option<String>,
        port: Option<String>,
    ) -> Result<Self> {
        let mut settings = config::Config::builder();

        // An explicit path must exist, the default one is optional
        match path {
            Some(path) if !path.exists() => {
                return Err(ServerError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (ROSTER_STORAGE__MONGO_URI, ...)
        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        settings = settings
            .set_override_option("storage.mongo_uri", mongo_uri)
            .and_then(|s| s.set_override_option("server.port", port))
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.mongo_uri.trim().is_empty() {
            return Err(ServerError::Config(format!(
                "MongoDB URI is required (set {})",
                MONGO_URI_ENV
            )));
        }

        if self.storage.database.is_empty() || self.storage.collection.is_empty() {
            return Err(ServerError::Config(
                "Database and collection names must not be empty".to_string(),
            ));
        }

        if self.timeouts.request_secs == 0 || self.timeouts.connect_secs == 0 {
            return Err(ServerError::Config(
                "Timeouts must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        mongo_uri: default_mongo_uri(),
        database: default_database(),
        collection: default_collection(),
    }
}

fn default_mongo_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database() -> String {
    "testdb".to_string()
}

fn default_collection() -> String {
    "users".to_string()
}

fn default_timeouts() -> TimeoutSettings {
    TimeoutSettings {
        request_secs: default_request_secs(),
        connect_secs: default_connect_secs(),
    }
}

fn default_request_secs() -> u64 {
    5
}

fn default_connect_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            timeouts: default_timeouts(),
        }
    }
}
