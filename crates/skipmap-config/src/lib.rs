//! Configuration management and loading for skipmap.
//!
//! A [`SkipMapConfig`] carries the three knobs a skip list exposes: the
//! configured level bound, the promotion probability, and an optional seed
//! for reproducible level draws. Configs can be built in code or loaded from
//! JSON/YAML files.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use skipmap_level::Probability;
use std::path::Path;
use thiserror::Error;

/// Level bound used when none is configured.
pub const DEFAULT_MAX_LEVEL: usize = 32;

/// Largest level bound a config may request. `p^64` is far below any
/// reachable element count for every valid `p`.
pub const MAX_SUPPORTED_LEVEL: usize = 64;

/// Configuration validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_level {requested} exceeds the supported ceiling of {ceiling}")]
    MaxLevelTooLarge { requested: usize, ceiling: usize },
    #[error(transparent)]
    Probability(#[from] skipmap_level::ProbabilityError),
}

/// Configuration format types supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl Default for ConfigFormat {
    fn default() -> Self {
        Self::Yaml
    }
}

impl ConfigFormat {
    /// Pick a format from a file extension, defaulting to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Skip list configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipMapConfig {
    /// Upper bound for newly drawn levels. Raising it is always safe;
    /// lowering it only caps future draws.
    #[serde(default = "default_max_level")]
    pub max_level: usize,

    /// Chance of promoting a node one level higher
    #[serde(default)]
    pub probability: Probability,

    /// Seed for the level generator. `None` seeds from the OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_max_level() -> usize {
    DEFAULT_MAX_LEVEL
}

impl Default for SkipMapConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            probability: Probability::default(),
            seed: None,
        }
    }
}

impl SkipMapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn with_probability(mut self, probability: Probability) -> Self {
        self.probability = probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the config against the supported bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level > MAX_SUPPORTED_LEVEL {
            return Err(ConfigError::MaxLevelTooLarge {
                requested: self.max_level,
                ceiling: MAX_SUPPORTED_LEVEL,
            });
        }
        // Deserialization validates too, but the field is public.
        Probability::new(self.probability.get())?;
        Ok(())
    }
}

/// Parse a config from text in the given format and validate it.
pub fn parse_config(contents: &str, format: ConfigFormat) -> anyhow::Result<SkipMapConfig> {
    let config: SkipMapConfig = match format {
        ConfigFormat::Json => {
            serde_json::from_str(contents).context("Failed to parse JSON config")?
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_str(contents).context("Failed to parse YAML config")?
        }
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<SkipMapConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path);
    log::debug!("loading skipmap config from {} as {:?}", path.display(), format);
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&contents, format).with_context(|| format!("Invalid config {}", path.display()))
}

/// Save configuration to a file
pub fn save_config<P: AsRef<Path>>(config: &SkipMapConfig, path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    let contents = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to serialize JSON config")?
        }
        ConfigFormat::Yaml => {
            serde_yaml::to_string(config).context("Failed to serialize YAML config")?
        }
    };

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_default_values() {
        let config = SkipMapConfig::default();
        assert_eq!(config.max_level, 32);
        assert_eq!(config.probability, Probability::QUARTER);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builders() {
        let config = SkipMapConfig::new()
            .with_max_level(12)
            .with_probability(Probability::HALF)
            .with_seed(99);
        assert_eq!(config.max_level, 12);
        assert_eq!(config.probability, Probability::HALF);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn config_serialize_yaml() {
        let yaml = serde_yaml::to_string(&SkipMapConfig::default()).unwrap();
        insta::assert_snapshot!(yaml, @r"
        max_level: 32
        probability: 0.25
        ");
    }

    #[test]
    fn config_serialize_json_with_seed() {
        let json = serde_json::to_string(&SkipMapConfig::default().with_seed(7)).unwrap();
        insta::assert_snapshot!(json, @r#"{"max_level":32,"probability":0.25,"seed":7}"#);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = parse_config("{}", ConfigFormat::Json).unwrap();
        assert_eq!(config, SkipMapConfig::default());

        let config = parse_config("seed: 5\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.max_level, DEFAULT_MAX_LEVEL);
    }

    #[test]
    fn invalid_probability_is_rejected() {
        let err = parse_config(r#"{"probability": 1.0}"#, ConfigFormat::Json).unwrap_err();
        assert!(format!("{err:#}").contains("between 0 and 1"));
    }

    #[test]
    fn oversized_max_level_is_rejected() {
        let config = SkipMapConfig::default().with_max_level(65);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MaxLevelTooLarge { requested: 65, ceiling: 64 })
        );
        assert!(parse_config("max_level: 100\n", ConfigFormat::Yaml).is_err());
    }

    #[test]
    fn zero_max_level_is_allowed() {
        let config = SkipMapConfig::default().with_max_level(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("noext")), ConfigFormat::Yaml);
    }

    #[test]
    fn load_save_yaml_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("skipmap.yaml");

        let config = SkipMapConfig::new()
            .with_max_level(16)
            .with_probability(Probability::HALF)
            .with_seed(42);

        save_config(&config, &config_path).unwrap();
        let loaded = load_config(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_save_json_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("skipmap.json");

        let config = SkipMapConfig::default();

        save_config(&config, &config_path).unwrap();
        let loaded = load_config(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("absent.yaml");
        let err = load_config(&config_path).unwrap_err();
        assert!(err.to_string().contains("absent.yaml"));
    }
}
