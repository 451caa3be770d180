use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    BROWSER_USER_AGENT, DEFAULT_FUZZY_THRESHOLD, DEFAULT_PORT, DEFAULT_POPULATIONS,
    DEFAULT_REFERENCE_CSV, DEFAULT_SOURCE_URL, VISITORS_COLUMN,
};
use crate::error::{PipelineError, Result};

const DEFAULT_CONFIG_PATH: &str = "museums.toml";

/// Process-wide settings, resolved once at startup.
///
/// Precedence: built-in defaults, then the TOML file, then `MUSEUMS_*`
/// environment variables (a `.env` file is honored), then CLI flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reference_csv: PathBuf,
    pub source: SourceConfig,
    pub fuzzy_threshold: u8,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub user_agent: String,
    pub visitors_column: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub default_populations: String,
    pub metrics_port: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_csv: PathBuf::from(DEFAULT_REFERENCE_CSV),
            source: SourceConfig::default(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            server: ServerConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            visitors_column: VISITORS_COLUMN.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_populations: DEFAULT_POPULATIONS.to_string(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load from `path`, or from `museums.toml` if present, then apply env overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `MUSEUMS_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("MUSEUMS_REFERENCE_CSV") {
            self.reference_csv = PathBuf::from(path);
        }
        if let Some(url) = lookup("MUSEUMS_SOURCE_URL") {
            self.source.url = url;
        }
        if let Some(threshold) = lookup("MUSEUMS_FUZZY_THRESHOLD") {
            self.fuzzy_threshold = parse_env("MUSEUMS_FUZZY_THRESHOLD", &threshold)?;
        }
        if let Some(port) = lookup("MUSEUMS_PORT") {
            self.server.port = parse_env("MUSEUMS_PORT", &port)?;
        }
        if let Some(port) = lookup("MUSEUMS_METRICS_PORT") {
            self.server.metrics_port = Some(parse_env("MUSEUMS_METRICS_PORT", &port)?);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PipelineError::Config(format!("Invalid value for {}: '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.fuzzy_threshold, 85);
        assert_eq!(config.server.default_populations, "1000000,5000000,10000000");
        assert_eq!(config.source.visitors_column, "Visitors in 2024");
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str(
            r#"
            reference_csv = "/data/worldcities.csv"

            [server]
            port = 9000
            "#,
        )
        .unwrap();
        assert_eq!(config.reference_csv, PathBuf::from("/data/worldcities.csv"));
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("MUSEUMS_REFERENCE_CSV", "cities.csv"),
            ("MUSEUMS_FUZZY_THRESHOLD", "90"),
            ("MUSEUMS_METRICS_PORT", "9898"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.reference_csv, PathBuf::from("cities.csv"));
        assert_eq!(config.fuzzy_threshold, 90);
        assert_eq!(config.server.metrics_port, Some(9898));
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = Config::default();
        let err = config
            .apply_env(|key| (key == "MUSEUMS_PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }
}
