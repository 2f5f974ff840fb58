use serde::Deserialize;
use std::env::vars;
use std::fmt::Display;
use tracing::{info, warn};

/// Default upstream quotes provider.
pub const DEFAULT_QUOTES_API_URL: &str = "https://api.api-ninjas.com";

/// Default listen port when PORT is not set.
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Deserialize)]
pub enum Env {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "prod")]
    Prod,
    #[serde(rename = "test")]
    Test,
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Prod => write!(f, "prod"),
            Env::Test => write!(f, "test"),
        }
    }
}

// The final, validated configuration struct.
// `server_addr` and `port` are guaranteed to be populated.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    server_addr: String,
    port: u16,
    // Upstream quotes provider
    quotes_api_url: String,
    quotes_api_key: Option<String>,
}

// An intermediate struct for deserializing environment variables
// where everything besides ENV is optional.
#[derive(Deserialize)]
struct RawConfig {
    env: Option<Env>,
    server_addr: Option<String>,
    port: Option<u16>,
    quotes_api_url: Option<String>,
    quotes_api_key: Option<String>,
}

impl Config {
    /// Create a test configuration with default values.
    ///
    /// This function is available for both unit tests and integration tests.
    /// It should not be used in production code.
    pub fn new_for_test() -> Self {
        Self {
            env: Env::Test,
            server_addr: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            quotes_api_url: DEFAULT_QUOTES_API_URL.to_string(),
            quotes_api_key: None,
        }
    }

    /// Create a test configuration pointed at a specific upstream URL,
    /// e.g. a wiremock server.
    pub fn new_for_test_with_upstream(
        upstream_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let mut config = Self::new_for_test();
        config.quotes_api_url = upstream_url.into();
        config.quotes_api_key = Some(api_key.into());
        config
    }

    pub fn environment(&self) -> &Env {
        &self.env
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn is_local(&self) -> bool {
        matches!(self.env, Env::Local)
    }

    pub fn quotes_api_url(&self) -> &str {
        &self.quotes_api_url
    }

    pub fn quotes_api_key(&self) -> Option<&str> {
        self.quotes_api_key.as_deref()
    }

    /// Initializes configuration by reading from environment variables
    /// and applying environment-aware defaults.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");

        // First, deserialize into a temporary struct that allows for optional fields
        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            env,
            server_addr,
            port,
            quotes_api_url,
            quotes_api_key,
        } = raw_config;

        let env = match env {
            Some(env) => env,
            None => {
                info!("ENV not set, defaulting to local environment");
                Env::Local
            }
        };

        // Apply the default logic for `server_addr` based on the environment
        let server_addr = match server_addr {
            Some(addr) => {
                info!("Using provided SERVER_ADDR: {}", addr);
                addr
            }
            None => {
                let default_addr = match env {
                    Env::Local => "127.0.0.1",
                    _ => "0.0.0.0",
                };
                info!(
                    "SERVER_ADDR not set, defaulting to {} for {} environment",
                    default_addr, env
                );
                default_addr.to_string()
            }
        };

        let port = match port {
            Some(port) => port,
            None => {
                info!("PORT not set, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let quotes_api_url = quotes_api_url.unwrap_or_else(|| DEFAULT_QUOTES_API_URL.to_string());

        // The upstream credential is required for prod. Local and test runs may omit it:
        // every upstream call then fails and the relay serves its fallback quote.
        let quotes_api_key = match quotes_api_key {
            Some(key) => Some(key),
            None if matches!(env, Env::Prod) => {
                anyhow::bail!("QUOTES_API_KEY must be set for {} environment", env);
            }
            None => {
                warn!(
                    "QUOTES_API_KEY not set for {} environment, upstream calls will fail over to the fallback quote",
                    env
                );
                None
            }
        };

        Ok(Config {
            env,
            server_addr,
            port,
            quotes_api_url,
            quotes_api_key,
        })
    }
}
