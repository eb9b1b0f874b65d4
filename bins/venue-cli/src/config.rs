//! Configuration file loading
//!
//! Settings come from a TOML file; every key is optional and falls back to
//! the engine defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use venue_index::{SimilarityWeights, DEFAULT_LIMIT, DEFAULT_SUGGESTION_LIMIT};

const CONFIG_FILE: &str = "venue-cli.toml";

/// Root configuration schema
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSchema {
    #[serde(default)]
    pub pool: PoolConfig,

    #[serde(default)]
    pub recommend: RecommendConfig,

    #[serde(default)]
    pub suggest: SuggestConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the venue pool is read from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoolConfig {
    /// Path to a JSON export of venues
    pub path: Option<PathBuf>,
}

/// Similarity recommendation settings
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    /// Number of similar venues to return
    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default = "default_category_weight")]
    pub category_weight: u32,

    #[serde(default = "default_city_weight")]
    pub city_weight: u32,

    #[serde(default = "default_service_weight")]
    pub service_weight: u32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            category_weight: default_category_weight(),
            city_weight: default_city_weight(),
            service_weight: default_service_weight(),
        }
    }
}

impl RecommendConfig {
    pub fn weights(&self) -> SimilarityWeights {
        SimilarityWeights {
            category: self.category_weight,
            city: self.city_weight,
            service: self.service_weight,
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_category_weight() -> u32 {
    SimilarityWeights::default().category
}

fn default_city_weight() -> u32 {
    SimilarityWeights::default().city
}

fn default_service_weight() -> u32 {
    SimilarityWeights::default().service
}

/// Typeahead settings
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    /// Maximum completions shown
    #[serde(default = "default_suggestion_limit")]
    pub limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: default_suggestion_limit(),
        }
    }
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Include the event target in log lines
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            show_target: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path, a standard location, or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(format!(".{CONFIG_FILE}")),
        PathBuf::from(CONFIG_FILE),
        Path::new(".config").join(CONFIG_FILE),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("venue-cli").join("config.toml"));
    }

    candidates.into_iter().find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    parse_config(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn parse_config(content: &str) -> Result<ConfigSchema> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.recommend.limit, 3);
        assert_eq!(config.schema.suggest.limit, 5);
        assert_eq!(config.schema.recommend.weights(), SimilarityWeights::default());
    }

    #[test]
    fn test_partial_config() {
        let schema = parse_config(
            r#"
            [pool]
            path = "venues.json"

            [recommend]
            city_weight = 4
            "#,
        )
        .unwrap();

        assert_eq!(schema.pool.path.as_deref(), Some(Path::new("venues.json")));
        assert_eq!(schema.recommend.limit, 3);
        assert_eq!(
            schema.recommend.weights(),
            SimilarityWeights {
                category: 3,
                city: 4,
                service: 1
            }
        );
        assert_eq!(schema.logging.level, "warn");
    }

    #[test]
    fn test_invalid_config() {
        assert!(parse_config("[recommend]\nlimit = \"three\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("does-not-exist.toml"))).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.toml"));
    }
}
