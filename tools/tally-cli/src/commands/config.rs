//! Config command implementation.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            if ctx.output.is_json() {
                ctx.output.json(&ctx.config);
            } else {
                ctx.output.header("Current Configuration");
                ctx.output.block(&ctx.config.to_toml()?);
            }
        }
        ConfigCommand::Init { force } => {
            let path = ctx.cwd.join(CONFIG_NAMES[0]);

            if path.exists() && !force {
                bail!(
                    "{} already exists. Use --force to overwrite.",
                    path.display()
                );
            }

            std::fs::write(&path, generate_default_config())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output
                .success(&format!("Created {}", path.display()));
        }
        ConfigCommand::Path => {
            let config = ctx
                .config_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(defaults)".to_string());
            let catalog = ctx.catalog_path();
            let cart = ctx.cart_path();

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "config": ctx.config_path,
                    "catalog_file": catalog,
                    "cart_file": cart,
                }));
            } else {
                ctx.output.kv("Config", &config);
                ctx.output.kv("Catalog", &catalog.display().to_string());
                ctx.output.kv("Cart", &cart.display().to_string());
            }
        }
    }

    Ok(())
}
