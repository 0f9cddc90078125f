//! CLI command implementations.

pub mod cart;
pub mod config;

use clap::{Args, Subcommand};
use rocketshoes_commerce::{CommerceError, ProductId};
use thiserror::Error;

/// A cart operation failed and the store has already shown its notice.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct NoticeShown(pub CommerceError);

/// Whether an error still has to be shown to the user.
pub fn needs_report(err: &anyhow::Error) -> bool {
    err.downcast_ref::<NoticeShown>().is_none()
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Print only the totals.
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product ID to add one unit of.
    pub product_id: ProductId,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product ID to remove.
    pub product_id: ProductId,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Product ID to update.
    pub product_id: ProductId,

    /// New quantity. Zero or less is ignored.
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::context::Context;
    use crate::output::Output;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let dir = std::env::temp_dir().join(format!("rocketshoes-cmd-{}-{}", std::process::id(), nanos));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn context_in(dir: PathBuf) -> Context {
        let mut config = CliConfig::default();
        config.api.base_url = "http://127.0.0.1:9".to_string();
        config.api.timeout_secs = 2;
        Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: dir,
        }
    }

    #[test]
    fn test_notice_shown_is_not_reported_again() {
        let err = anyhow::Error::new(NoticeShown(CommerceError::ProductNotInCart(ProductId::new(1))));
        assert!(!needs_report(&err));
    }

    #[test]
    fn test_wrapped_store_error_is_reported() {
        let err = anyhow::Error::new(CommerceError::Overflow).context("Failed to load cart");
        assert!(needs_report(&err));
    }

    #[tokio::test]
    async fn test_show_with_corrupt_storage_is_reported() {
        let dir = temp_dir();
        let ctx = context_in(dir.clone());
        let storage = ctx.resolve_path(&ctx.config.storage.path);
        std::fs::create_dir_all(storage.parent().unwrap()).unwrap();
        std::fs::write(&storage, "not json").unwrap();

        let err = cart::show(ShowArgs { summary: false }, &ctx).await.unwrap_err();

        assert!(needs_report(&err));
        assert!(format!("{:#}", err).contains("Failed to load cart"));
    }

    #[tokio::test]
    async fn test_show_without_storage_succeeds() {
        let ctx = context_in(temp_dir());
        cart::show(ShowArgs { summary: true }, &ctx).await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_add_is_marked_as_shown() {
        let ctx = context_in(temp_dir());

        let err = cart::add(AddArgs { product_id: ProductId::new(1) }, &ctx)
            .await
            .unwrap_err();

        assert!(!needs_report(&err));
        assert!(matches!(
            err.downcast_ref::<NoticeShown>(),
            Some(NoticeShown(CommerceError::CatalogError(_)))
        ));
    }
}
