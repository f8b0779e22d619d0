//! Server configuration

use anyhow::Result;
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Port the API server listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    /// Load configuration from SIZER_-prefixed environment variables
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("SIZER"))
            .build()?;

        Ok(config
            .try_deserialize()
            .unwrap_or_else(|_| ServerConfig { port: default_port() }))
    }
}
