//! RocketShoes CLI - Command line front end for the shopping cart.
//!
//! Commands:
//! - `rocketshoes show` - Show the cart and its totals
//! - `rocketshoes add` - Add one unit of a product
//! - `rocketshoes remove` - Remove a product from the cart
//! - `rocketshoes update` - Set a product's quantity
//! - `rocketshoes config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod toast;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, ConfigArgs, RemoveArgs, ShowArgs, UpdateArgs};

/// RocketShoes CLI - Manage the RocketShoes shopping cart
#[derive(Parser)]
#[command(name = "rocketshoes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart
    Show(ShowArgs),

    /// Add one unit of a product
    Add(AddArgs),

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Set a product's quantity
    Update(UpdateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Show(args) => commands::cart::show(args, &ctx).await,
        Commands::Add(args) => commands::cart::add(args, &ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::Update(args) => commands::cart::update(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        if commands::needs_report(&e) {
            ctx.output.error(&format!("{:#}", e));
        }
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocketshoes_commerce::ProductId;

    #[test]
    fn test_update_args_accept_negative_amount() {
        let cli = Cli::try_parse_from(["rocketshoes", "update", "2", "-1"]).unwrap();
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.product_id, ProductId::new(2));
                assert_eq!(args.amount, -1);
            }
            _ => panic!("expected update"),
        }
    }

    #[test]
    fn test_product_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["rocketshoes", "add", "tenis"]).is_err());
        assert!(Cli::try_parse_from(["rocketshoes", "remove", "3"]).is_ok());
    }
}
