//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use rocketshoes_cache::FileStore;
use rocketshoes_commerce::cart::CartStore;
use rocketshoes_commerce::catalog::HttpCatalog;
use rocketshoes_data::FetchClient;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;
use crate::toast::ToastNotifier;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => find_config(&cwd),
        };
        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        tracing::debug!(config = ?config_path, "configuration loaded");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Build the cart store from configuration.
    pub fn open_store(&self) -> Result<Arc<CartStore>> {
        let client = FetchClient::new()
            .with_base_url(self.config.api.base_url.clone())
            .with_timeout(Duration::from_secs(self.config.api.timeout_secs));
        let storage_path = self.resolve_path(&self.config.storage.path);
        let storage = FileStore::open(&storage_path)
            .with_context(|| format!("Failed to open cart storage: {}", storage_path.display()))?;

        let store = CartStore::builder(Arc::new(HttpCatalog::new(client)), Arc::new(storage))
            .notifier(Arc::new(ToastNotifier::new(self.output.clone())))
            .storage_key(self.config.storage.key.clone())
            .open()
            .context("Failed to load cart")?;
        Ok(Arc::new(store))
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find a config file in the directory tree, nearest first.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
