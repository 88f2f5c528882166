//! CLI command implementations.

pub mod bill;
pub mod cart;
pub mod config;
pub mod products;

use clap::{Args, Subcommand, ValueEnum};
use tally_commerce::VariantKey;

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    #[command(subcommand)]
    pub command: ProductCommand,
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// Add a product variant, or change its price.
    Add {
        /// Product name.
        name: String,
        /// Variant key, e.g. size in grams or millilitres.
        variant: VariantKey,
        /// Price (e.g. 736 or 12.50).
        price: String,
    },
    /// Remove a product (or one of its variants).
    Remove {
        /// Product name (prompted for when omitted).
        name: Option<String>,
        /// Remove only this variant.
        #[arg(long)]
        variant: Option<VariantKey>,
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add one unit of a product variant.
    Add {
        /// Product name (prompted for when omitted).
        name: Option<String>,
        /// Variant key (prompted for when omitted).
        variant: Option<VariantKey>,
    },
    /// Show cart contents.
    Show,
    /// Remove one unit of a product variant.
    Remove {
        /// Product name (prompted for when omitted).
        name: Option<String>,
        /// Variant key (prompted for when omitted).
        variant: Option<VariantKey>,
    },
    /// Turn the 10% discount on or off.
    Discount {
        /// New discount state.
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Empty the cart and clear the discount.
    Reset {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// On/off switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        self == Toggle::On
    }
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
    /// Initialize a new config file in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Show which files are in use.
    Path,
}
