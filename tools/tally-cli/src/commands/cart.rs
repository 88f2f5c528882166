//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Select};
use serde::Serialize;
use tally_commerce::{Cart, CartLine, Catalog, VariantKey};
use tally_store::RemoveOutcome;

use super::products::pick_product;
use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::discount_badge;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartCommand::Add { name, variant } => add(ctx, name, variant),
        CartCommand::Show => show(ctx),
        CartCommand::Remove { name, variant } => remove(ctx, name, variant),
        CartCommand::Discount { state } => {
            let mut ledger = ctx.cart_ledger()?;
            let enabled = state.enabled();
            ledger.set_discount(enabled)?;
            if enabled {
                ctx.output.success("10% discount applied to cart");
            } else {
                ctx.output.success("Discount removed from cart");
            }
            Ok(())
        }
        CartCommand::Reset { yes } => {
            let mut ledger = ctx.cart_ledger()?;
            if !yes && ctx.output.can_prompt() {
                let confirmed = Confirm::new()
                    .with_prompt("Empty the cart and clear the discount?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.info("Reset cancelled");
                    return Ok(());
                }
            }
            ledger.reset()?;
            ctx.output.warn("Cart has been reset!");
            Ok(())
        }
    }
}

fn add(ctx: &Context, name: Option<String>, variant: Option<VariantKey>) -> Result<()> {
    let store = ctx.catalog_store()?;
    let catalog = store.catalog();

    let name = match name {
        Some(name) => name,
        None => pick_product(ctx, catalog, "Select a product")?,
    };
    let variant = match variant {
        Some(variant) => variant,
        None => pick_variant(ctx, catalog, &name)?,
    };

    let mut ledger = ctx.cart_ledger()?;
    let line = ledger.add_to_cart(catalog, &name, variant)?;
    let quantity = ledger.cart().quantity_of(line.product.as_str(), line.variant);
    ctx.output
        .success(&format!("{} added to cart (x{})", line.label(), quantity));
    Ok(())
}

fn remove(ctx: &Context, name: Option<String>, variant: Option<VariantKey>) -> Result<()> {
    let mut ledger = ctx.cart_ledger()?;

    let (name, variant) = match (name, variant) {
        (Some(name), Some(variant)) => (name, variant),
        (name, variant) => {
            let line = pick_line(ctx, ledger.cart(), name.as_deref(), variant)?;
            (line.product.to_string(), line.variant)
        }
    };

    match ledger.remove_from_cart(&name, variant)? {
        RemoveOutcome::Removed(line) => {
            ctx.output
                .success(&format!("{} removed from cart", line.label()));
        }
        RemoveOutcome::NotInCart => {
            ctx.output
                .info(&format!("{} {} is not in the cart", name.trim(), variant));
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct CartView<'a> {
    lines: Vec<LineView<'a>>,
    discount: bool,
    stale: Vec<&'a CartLine>,
}

#[derive(Serialize)]
struct LineView<'a> {
    product: &'a str,
    variant: VariantKey,
    quantity: usize,
}

fn show(ctx: &Context) -> Result<()> {
    let store = ctx.catalog_store()?;
    let ledger = ctx.cart_ledger()?;
    let cart = ledger.cart();
    let stale = cart.stale_lines(store.catalog());

    if ctx.output.is_json() {
        let lines = distinct_lines(cart)
            .into_iter()
            .map(|line| LineView {
                product: line.product.as_str(),
                variant: line.variant,
                quantity: cart.quantity_of(line.product.as_str(), line.variant),
            })
            .collect();
        ctx.output.json(&CartView {
            lines,
            discount: cart.discount,
            stale,
        });
        return Ok(());
    }

    ctx.output
        .header(&format!("Your Cart ({} item(s))", cart.item_count()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
    } else {
        ctx.output.table_row(&["PRODUCT", "VARIANT", "QTY"], &[20, 8, 4]);
        for line in distinct_lines(cart) {
            let quantity = cart.quantity_of(line.product.as_str(), line.variant);
            ctx.output.table_row(
                &[
                    line.product.as_str(),
                    &line.variant.to_string(),
                    &quantity.to_string(),
                ],
                &[20, 8, 4],
            );
        }
    }
    ctx.output.kv("Discount", &discount_badge(cart.discount));

    for line in &stale {
        ctx.output
            .warn(&format!("{} is no longer in the catalog", line.label()));
    }
    Ok(())
}

/// Distinct cart lines in order of first appearance.
fn distinct_lines(cart: &Cart) -> Vec<&CartLine> {
    let mut seen: Vec<&CartLine> = Vec::new();
    for line in &cart.lines {
        if !seen.contains(&line) {
            seen.push(line);
        }
    }
    seen
}

fn pick_variant(ctx: &Context, catalog: &Catalog, name: &str) -> Result<VariantKey> {
    let Some(product) = catalog.get(name) else {
        bail!("Product '{}' not found in catalog", name.trim());
    };
    if !ctx.output.can_prompt() {
        bail!("Variant is required when not running interactively");
    }

    let variants: Vec<(VariantKey, String)> = product
        .variants()
        .map(|(key, price)| (key, format!("{} ({})", key, price)))
        .collect();
    let labels: Vec<&str> = variants.iter().map(|(_, label)| label.as_str()).collect();
    let selection = Select::new()
        .with_prompt(format!("Select a variant of {}", product.name))
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(variants[selection].0)
}

fn pick_line<'a>(
    ctx: &Context,
    cart: &'a Cart,
    name: Option<&str>,
    variant: Option<VariantKey>,
) -> Result<&'a CartLine> {
    if cart.is_empty() {
        bail!("Your cart is empty");
    }
    if !ctx.output.can_prompt() {
        bail!("Product name and variant are required when not running interactively");
    }

    let candidates: Vec<&CartLine> = distinct_lines(cart)
        .into_iter()
        .filter(|line| name.map_or(true, |n| line.product.as_str() == n.trim()))
        .filter(|line| variant.map_or(true, |v| line.variant == v))
        .collect();
    if candidates.is_empty() {
        bail!("No matching line in the cart");
    }

    let labels: Vec<String> = candidates.iter().map(|line| line.label()).collect();
    let selection = Select::new()
        .with_prompt("Select an item to remove")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(candidates[selection])
}
