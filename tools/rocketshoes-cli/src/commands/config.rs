//! Configuration management commands.

use std::fs;

use anyhow::Result;
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output.kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());

    ctx.output.info("[storage]");
    ctx.output.kv(
        "path",
        &ctx.resolve_path(&ctx.config.storage.path).display().to_string(),
    );
    ctx.output.kv("key", &ctx.config.storage.key);

    ctx.output.info("[display]");
    ctx.output.kv("currency", &ctx.config.display.currency);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", config_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Config init cancelled");
            return Ok(());
        }
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
