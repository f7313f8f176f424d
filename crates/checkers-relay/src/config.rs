//! Configuration loading for the relay.

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    9090
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
        }
    }
}

impl Config {
    pub async fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // Look for relay.toml in the current directory or parents.
        let paths = ["relay.toml", "../relay.toml", "../../relay.toml"];

        for path in paths {
            if Path::new(path).exists() {
                let content = tokio::fs::read_to_string(path).await?;
                let config: Config = toml::from_str(&content)?;
                tracing::info!("loaded config from {}", path);
                return Ok(config);
            }
        }

        tracing::info!("no relay.toml found, using defaults");
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn parse_toml() {
        let config: Config = toml::from_str("port = 4000").unwrap();
        assert_eq!(config.port, 4000);
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.port, 9090);
    }
}
