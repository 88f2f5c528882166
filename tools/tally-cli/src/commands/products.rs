//! Catalog browsing and product management.

use anyhow::{bail, Context as _, Result};
use dialoguer::{Confirm, Select};
use tally_commerce::{Catalog, Money};
use tally_store::encode_catalog;

use super::{ProductArgs, ProductCommand};
use crate::context::Context;

/// Browse the catalog grouped by product.
pub fn browse(ctx: &Context) -> Result<()> {
    let store = ctx.catalog_store()?;
    let catalog = store.catalog();

    if ctx.output.is_json() {
        ctx.output.json(&encode_catalog(catalog));
        return Ok(());
    }

    ctx.output.header(&format!("Available Products ({})", catalog.len()));
    if catalog.is_empty() {
        ctx.output
            .info("The catalog is empty. Add a product with `tally product add`.");
        return Ok(());
    }

    for product in catalog.products() {
        ctx.output.group(product.name.as_str());
        for (variant, price) in product.variants() {
            ctx.output
                .table_row(&["", &variant.to_string(), &price.display()], &[2, 8, 12]);
        }
    }

    Ok(())
}

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductCommand::Add {
            name,
            variant,
            price,
        } => {
            let price = Money::parse(&price, ctx.currency()?)
                .with_context(|| format!("Price must be a positive amount, got '{}'", price))?;
            let mut store = ctx.catalog_store()?;
            let previous = store.add_product(&name, variant, price)?;

            let name = name.trim();
            match previous {
                Some(old) if old != price => ctx.output.success(&format!(
                    "{} {} price changed from {} to {}",
                    name, variant, old, price
                )),
                Some(_) => ctx
                    .output
                    .info(&format!("{} {} already costs {}", name, variant, price)),
                None => ctx
                    .output
                    .success(&format!("{} {} added at {}", name, variant, price)),
            }
            Ok(())
        }
        ProductCommand::Remove { name, variant, yes } => {
            let mut store = ctx.catalog_store()?;
            let name = match name {
                Some(name) => name,
                None => pick_product(ctx, store.catalog(), "Select a product to remove")?,
            };

            let target = match variant {
                Some(v) => format!("{} {}", name.trim(), v),
                None => name.trim().to_string(),
            };
            if store.catalog().get(name.trim()).is_none() {
                ctx.output
                    .info(&format!("{} is not in the catalog; nothing removed", target));
                return Ok(());
            }

            if !yes && ctx.output.can_prompt() {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Remove {} from the catalog?", target))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Removal cancelled");
                    return Ok(());
                }
            }

            let removed = match variant {
                Some(v) => store.remove_variant(&name, v)?.is_some(),
                None => store.remove_product(&name)?.is_some(),
            };
            if !removed {
                ctx.output
                    .info(&format!("{} is not in the catalog; nothing removed", target));
                return Ok(());
            }
            ctx.output
                .success(&format!("{} removed from products", target));

            warn_stale_cart(ctx, store.catalog());
            Ok(())
        }
    }
}

/// Interactively choose a product name.
pub fn pick_product(ctx: &Context, catalog: &Catalog, prompt: &str) -> Result<String> {
    if !ctx.output.can_prompt() {
        bail!("Product name is required when not running interactively");
    }
    let names: Vec<&str> = catalog.products().map(|p| p.name.as_str()).collect();
    if names.is_empty() {
        bail!("The catalog is empty");
    }
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&names)
        .default(0)
        .interact()?;
    Ok(names[selection].to_string())
}

/// Tell the operator about cart lines that a catalog change orphaned.
fn warn_stale_cart(ctx: &Context, catalog: &Catalog) {
    let ledger = match ctx.cart_ledger() {
        Ok(ledger) => ledger,
        Err(e) => {
            ctx.output.debug(&format!("Skipping cart check: {:#}", e));
            return;
        }
    };
    let stale = ledger.cart().stale_lines(catalog);
    if !stale.is_empty() {
        ctx.output.warn(&format!(
            "{} cart line(s) refer to items no longer in the catalog; remove them with `tally cart remove`",
            stale.len()
        ));
    }
}
