//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use rocketshoes_commerce::cart::default_storage_key;
use rocketshoes_commerce::Currency;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["rocketshoes.toml", ".rocketshoes.toml", "rocketshoes.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Storefront API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Cart persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would only fail later.
    pub fn validate(&self) -> Result<()> {
        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://")) {
            bail!("api.base_url must be an http(s) URL, got '{}'", self.api.base_url);
        }
        if self.api.timeout_secs == 0 {
            bail!("api.timeout_secs must be greater than zero");
        }
        if self.storage.key.trim().is_empty() {
            bail!("storage.key must not be empty");
        }
        self.display.currency()?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Storefront API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL serving `/stock/{id}` and `/products/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Cart persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Storage document, relative to the working directory unless absolute.
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// Key the cart is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_path() -> String {
    ".rocketshoes/storage.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_storage_key(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Currency code prices are shown in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "BRL".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl DisplayConfig {
    /// The configured currency.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.currency)
            .with_context(|| format!("Unsupported currency: {}", self.currency))
    }
}

/// Generate a default rocketshoes.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# RocketShoes cart configuration

[api]
base_url = "{base_url}"
timeout_secs = {timeout}

[storage]
path = "{path}"
key = "{key}"

[display]
currency = "{currency}"
"#,
        base_url = default_base_url(),
        timeout = default_timeout_secs(),
        path = default_storage_path(),
        key = default_storage_key(),
        currency = default_currency(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let parsed: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, CliConfig::default());
        assert_eq!(parsed.storage.key, "@RocketShoes:cart");
        parsed.validate().unwrap();
    }

    #[test]
    fn test_load_generated_file() {
        let dir = std::env::temp_dir().join(format!("rocketshoes-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rocketshoes.toml");
        std::fs::write(&path, generate_default_config()).unwrap();

        assert_eq!(CliConfig::load(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: CliConfig = toml::from_str(
            r#"
[api]
base_url = "https://api.rocketshoes.dev"
"#,
        )
        .unwrap();
        assert_eq!(parsed.api.base_url, "https://api.rocketshoes.dev");
        assert_eq!(parsed.api.timeout_secs, 10);
        assert_eq!(parsed.display.currency().unwrap(), Currency::BRL);
    }

    #[test]
    fn test_json_config() {
        let parsed: CliConfig =
            serde_json::from_str(r#"{"display": {"currency": "usd"}}"#).unwrap();
        assert_eq!(parsed.display.currency().unwrap(), Currency::USD);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = CliConfig::default();
        config.api.base_url = "localhost:3333".to_string();
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.display.currency = "XYZ".to_string();
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.storage.key = " ".to_string();
        assert!(config.validate().is_err());
    }
}
