use std::env;

use auth::HashingOptions;
use auth::SigningConfig;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for auth-service.
///
/// Loaded once at startup; signing and hashing parameters are handed to
/// the `auth` crate as immutable structs at construction time.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub hashing: HashingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// JWT signing configuration.
///
/// All three fields are required; `TokenIssuer`/`TokenValidator`
/// construction fails when any is empty.
#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub key: String,
    pub issuer: String,
    pub audience: String,
}

/// Argon2id hashing configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct HashingConfig {
    pub salt_size: usize,
    pub hash_size: usize,
    pub iterations: u32,
    pub memory_size_kb: u32,
    pub parallelism: u32,
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Environment variables (JWT__KEY, DATABASE__URL, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Returns error if required configuration values are missing or invalid
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__KEY=... overrides jwt.key
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

impl JwtConfig {
    pub fn signing_config(&self) -> SigningConfig {
        SigningConfig::new(&self.key, &self.issuer, &self.audience)
    }
}

impl HashingConfig {
    pub fn hashing_options(&self) -> HashingOptions {
        HashingOptions {
            salt_size: self.salt_size,
            hash_size: self.hash_size,
            iterations: self.iterations,
            memory_size_kb: self.memory_size_kb,
            parallelism: self.parallelism,
        }
    }
}
