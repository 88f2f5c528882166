//! Tally CLI - Command line shopping cart.
//!
//! Commands:
//! - `tally products` - Browse the catalog
//! - `tally product` - Add or remove products
//! - `tally cart` - Add, show, remove, discount, reset
//! - `tally bill` - Show the computed bill
//! - `tally checkout` - Acknowledge the bill
//! - `tally config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, ConfigArgs, ProductArgs};

/// Tally - Manage a product catalog and a running shopping cart
#[derive(Parser)]
#[command(name = "tally")]
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
    /// Browse available products and their variants
    Products,

    /// Add or remove catalog products
    Product(ProductArgs),

    /// Work with the shopping cart
    Cart(CartArgs),

    /// Show the bill for the current cart
    Bill,

    /// Check out the current cart
    Checkout,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    tracing::debug!(
        catalog = %ctx.catalog_path().display(),
        cart = %ctx.cart_path().display(),
        "context loaded"
    );

    // Execute command
    let result = match cli.command {
        Commands::Products => commands::products::browse(&ctx),
        Commands::Product(args) => commands::products::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Bill => commands::bill::show(&ctx),
        Commands::Checkout => commands::bill::checkout(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
