//! Bill and checkout commands.

use anyhow::{anyhow, bail, Result};
use chrono::Local;
use tally_commerce::{Bill, CommerceError};

use crate::context::Context;

/// Show the bill for the current cart.
pub fn show(ctx: &Context) -> Result<()> {
    let Some(bill) = compute(ctx)? else {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    };
    print_bill(ctx, &bill);
    Ok(())
}

/// Print the bill and acknowledge the purchase.
///
/// Checkout is informational only; the cart is left as it is.
pub fn checkout(ctx: &Context) -> Result<()> {
    let Some(bill) = compute(ctx)? else {
        bail!("Cannot checkout: your cart is empty");
    };
    print_bill(ctx, &bill);

    if !ctx.output.is_json() {
        ctx.output.success("Checkout successful!");
        ctx.output
            .kv("Time", &Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
        ctx.output.kv("Amount due", &bill.total.display());
    }
    Ok(())
}

/// Compute the bill, or `None` when the cart is empty.
fn compute(ctx: &Context) -> Result<Option<Bill>> {
    let store = ctx.catalog_store()?;
    let ledger = ctx.cart_ledger()?;
    if ledger.cart().is_empty() {
        return Ok(None);
    }

    match ledger.bill(store.catalog()) {
        Ok(bill) => Ok(Some(bill)),
        Err(CommerceError::StaleCartLine { product, variant }) => Err(anyhow!(
            "Cart contains {} {}, which is no longer in the catalog. \
             Remove it with `tally cart remove \"{}\" {}` and try again.",
            product,
            variant,
            product,
            variant
        )),
        Err(e) => Err(e.into()),
    }
}

fn print_bill(ctx: &Context, bill: &Bill) {
    if ctx.output.is_json() {
        ctx.output.json(bill);
        return;
    }
    ctx.output.header("Your Bill");
    ctx.output.block(&bill.render());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TallyConfig;
    use crate::output::Output;
    use tally_commerce::{Currency, Money, VariantKey};

    fn context_in(dir: &std::path::Path) -> Context {
        Context {
            config: TallyConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_empty_cart_has_no_bill() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path());
        assert!(compute(&ctx).unwrap().is_none());
        assert!(show(&ctx).is_ok());
        assert!(checkout(&ctx).is_err());
    }

    #[test]
    fn test_bill_uses_persisted_state() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path());
        let store = ctx.catalog_store().unwrap();
        let mut ledger = ctx.cart_ledger().unwrap();
        let kg = VariantKey::new(1000).unwrap();
        ledger.add_to_cart(store.catalog(), "Honey", kg).unwrap();
        ledger.add_to_cart(store.catalog(), "Honey", kg).unwrap();

        let bill = compute(&ctx).unwrap().unwrap();
        assert_eq!(bill.total, Money::from_major(1472, Currency::INR));
        assert!(checkout(&ctx).is_ok());
        assert_eq!(ctx.cart_ledger().unwrap().cart().item_count(), 2);
    }

    #[test]
    fn test_stale_line_error_names_the_item() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path());
        let mut store = ctx.catalog_store().unwrap();
        let mut ledger = ctx.cart_ledger().unwrap();
        let kg = VariantKey::new(1000).unwrap();
        ledger.add_to_cart(store.catalog(), "Honey", kg).unwrap();
        store.remove_product("Honey").unwrap();

        let err = compute(&ctx).unwrap_err().to_string();
        assert!(err.contains("Honey 1000"));
        assert!(err.contains("tally cart remove"));
    }
}
