use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::domain::exemption::models::OperationRef;
use crate::domain::exemption::policy::ExemptionPolicy;
use crate::domain::exemption::policy::EXEMPT_PATH_FRAGMENTS;
use crate::domain::exemption::policy::LEGACY_MODULE;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub authentication: AuthenticationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default)]
    pub issuer: Option<String>,
}

/// Rules of the authentication gate.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AuthenticationConfig {
    /// Authorization scheme expected before the token
    pub scheme: String,
    pub legacy_module: String,
    pub exempt_path_fragments: Vec<String>,
    pub public_operations: Vec<OperationRef>,
}

impl Default for AuthenticationConfig {
    fn default() -> Self {
        Self {
            scheme: auth::bearer::DEFAULT_SCHEME.to_string(),
            legacy_module: LEGACY_MODULE.to_string(),
            exempt_path_fragments: EXEMPT_PATH_FRAGMENTS.iter().map(|s| s.to_string()).collect(),
            public_operations: vec![OperationRef::new("DataResourceService", "getDataFile")],
        }
    }
}

impl From<&AuthenticationConfig> for ExemptionPolicy {
    fn from(config: &AuthenticationConfig) -> Self {
        ExemptionPolicy::new(
            config.legacy_module.clone(),
            config.exempt_path_fragments.clone(),
            config.public_operations.clone(),
        )
    }
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}
