// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Server configuration module
//!
//! Configuration is loaded hierarchically (defaults, then config files, then
//! environment variables) and validated through dedicated types so an invalid
//! port or timeout cannot reach the server.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use anyhow::{Result, anyhow, ensure};
use config::{Config, ConfigError, Environment as ConfigEnv, File};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{ServerError, ServerResult};

/// A validated server port that ensures the value is appropriate for the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerPort {
    port: u16,
    environment: Environment,
}

impl ServerPort {
    /// Create a new `ServerPort`, ensuring it's valid for the given environment
    ///
    /// # Errors
    ///
    /// Returns an error if the port is 0 in non-testing environments
    pub fn new(port: u16, environment: Environment) -> Result<Self> {
        if port == 0 && environment != Environment::Testing {
            return Err(anyhow!("port cannot be 0 in non-testing environments"));
        }
        Ok(Self { port, environment })
    }

    /// Create a safe default port for development
    pub const fn default_development() -> Self {
        Self {
            port: 3000,
            environment: Environment::Development,
        }
    }

    /// Create a safe testing port (port 0, the OS picks)
    pub const fn testing() -> Self {
        Self {
            port: 0,
            environment: Environment::Testing,
        }
    }

    /// Get the port value
    pub fn value(&self) -> u16 {
        self.port
    }
}

impl<'de> Deserialize<'de> for ServerPort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let port = u16::deserialize(deserializer)?;
        // Validated against the environment during configuration loading
        Ok(Self {
            port,
            environment: Environment::Development,
        })
    }
}

/// A validated timeout duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeoutSeconds(Duration);

impl TimeoutSeconds {
    /// Create a new `TimeoutSeconds`, ensuring the value is within valid bounds
    ///
    /// # Errors
    ///
    /// Returns an error if timeout is 0 or greater than 300 seconds
    pub fn new(seconds: u64) -> Result<Self> {
        ensure!(seconds != 0, "timeout must be greater than 0");
        ensure!(seconds <= 300, "timeout cannot exceed 300");
        Ok(Self(Duration::from_secs(seconds)))
    }

    /// Create a safe default timeout (30 seconds)
    pub const fn default_value() -> Self {
        Self(Duration::from_secs(30))
    }

    /// Create a safe testing timeout (5 seconds)
    pub const fn testing() -> Self {
        Self(Duration::from_secs(5))
    }

    /// Get the timeout value
    pub fn value(&self) -> Duration {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeoutSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Self::new(seconds).map_err(|e| de::Error::custom(e.to_string()))
    }
}

impl Default for TimeoutSeconds {
    fn default() -> Self {
        Self::default_value()
    }
}

/// Environment types for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Development environment
    Development,
    /// Testing environment
    Testing,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
            Environment::Testing => write!(f, "testing"),
        }
    }
}

/// CoinGecko token-list settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinGeckoSettings {
    /// Base URL of the hosted token lists
    pub base_url: String,
}

/// GoPlus security-scan settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoPlusSettings {
    /// Base URL of the security API
    pub base_url: String,
}

/// 0x swap relay settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroExSettings {
    /// URL scheme, `https` outside of tests
    pub scheme: String,
    /// Host the per-chain subdomain prefix is applied to
    pub host: String,
    /// Space-separated API keys for the rotation
    pub api_keys: String,
}

/// Redis form-store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisSettings {
    /// Whether the form store is connected at startup
    pub enabled: bool,
    /// Redis connection URL
    pub url: String,
}

/// Upstream service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Token-list source
    pub coingecko: CoinGeckoSettings,
    /// Security-scan relay target
    pub goplus: GoPlusSettings,
    /// Swap-quote relay target
    pub zeroex: ZeroExSettings,
    /// Form store
    pub redis: RedisSettings,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            coingecko: CoinGeckoSettings {
                base_url: "https://tokens.coingecko.com".to_string(),
            },
            goplus: GoPlusSettings {
                base_url: "https://api.gopluslabs.io/api/v1".to_string(),
            },
            zeroex: ZeroExSettings {
                scheme: "https".to_string(),
                host: "api.0x.org".to_string(),
                api_keys: String::new(),
            },
            redis: RedisSettings {
                enabled: false,
                url: "redis://127.0.0.1:6379".to_string(),
            },
        }
    }
}

/// Server configuration for different environments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: IpAddr,
    /// Server port (validated for environment compatibility)
    pub port: ServerPort,
    /// Request timeout in seconds (validated range: 1-300)
    pub timeout_seconds: TimeoutSeconds,
    /// Environment type
    pub environment: Environment,
    /// Upstream service configuration
    #[serde(default)]
    pub upstreams: UpstreamConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: ServerPort::default_development(),
            timeout_seconds: TimeoutSeconds::default(),
            environment: Environment::Development,
            upstreams: UpstreamConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create configuration from environment variables and optional configuration files
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if configuration is invalid or cannot be loaded.
    pub fn from_env() -> ServerResult<Self> {
        Self::load().map_err(|e| ServerError::Config {
            message: format!("failed to load configuration: {e}"),
        })
    }

    /// Load configuration using the config crate with hierarchical sources
    ///
    /// Configuration is loaded in the following order (later sources override
    /// earlier ones):
    /// 1. Default values
    /// 2. Configuration file (config.json)
    /// 3. Environment-specific files (config.{env}.json)
    /// 4. Environment variables with `GATEWAY` prefix, `__` as the nesting
    ///    separator (e.g. `GATEWAY__UPSTREAMS__ZEROEX__API_KEYS`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let env_var = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let defaults = UpstreamConfig::default();

        let mut config_builder = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("timeout_seconds", 30)?
            .set_default("environment", "development")?
            .set_default("upstreams.coingecko.base_url", defaults.coingecko.base_url)?
            .set_default("upstreams.goplus.base_url", defaults.goplus.base_url)?
            .set_default("upstreams.zeroex.scheme", defaults.zeroex.scheme)?
            .set_default("upstreams.zeroex.host", defaults.zeroex.host)?
            .set_default("upstreams.zeroex.api_keys", defaults.zeroex.api_keys)?
            .set_default("upstreams.redis.enabled", defaults.redis.enabled)?
            .set_default("upstreams.redis.url", defaults.redis.url)?
            .add_source(File::with_name("config.json").required(false))
            .add_source(
                File::with_name(&format!("config.{}.json", env_var.to_lowercase())).required(false),
            )
            .add_source(
                ConfigEnv::with_prefix("GATEWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        if std::env::var("ENVIRONMENT").is_ok() {
            config_builder = config_builder.set_override("environment", env_var.to_lowercase())?;
        }

        let config = config_builder.build()?;
        let mut server_config: Self = config.try_deserialize()?;

        // Fix the ServerPort to have the correct environment context
        server_config.port = ServerPort::new(server_config.port.value(), server_config.environment)
            .map_err(|e| ConfigError::Message(format!("invalid port configuration: {e}")))?;

        Ok(server_config)
    }

    /// Create configuration optimized for testing
    ///
    /// Upstreams point at unroutable local addresses so nothing reaches the
    /// real services; tests that exercise a relay override the relevant
    /// fields with a mock server's address.
    pub fn for_testing() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: ServerPort::testing(),
            timeout_seconds: TimeoutSeconds::testing(),
            environment: Environment::Testing,
            upstreams: UpstreamConfig {
                coingecko: CoinGeckoSettings {
                    base_url: "http://127.0.0.1:9".to_string(),
                },
                goplus: GoPlusSettings {
                    base_url: "http://127.0.0.1:9".to_string(),
                },
                zeroex: ZeroExSettings {
                    scheme: "http".to_string(),
                    host: "127.0.0.1:9".to_string(),
                    api_keys: "test-key".to_string(),
                },
                redis: RedisSettings {
                    enabled: false,
                    url: "redis://127.0.0.1:6379".to_string(),
                },
            },
        }
    }

    /// Get socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port.value())
    }
}
