//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod orders;
pub mod track;

use clap::{Args, Subcommand};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

/// Cart subcommands.
#[derive(Subcommand)]
pub enum CartCommand {
    /// Show cart contents and totals
    List,

    /// Add a product to the cart
    Add {
        /// Product ID.
        #[arg(long)]
        id: String,

        /// Product name.
        #[arg(long)]
        name: String,

        /// Unit price in pesos, e.g. 150 or 65.50.
        #[arg(long)]
        price: f64,

        /// Quantity to add.
        #[arg(short, long, default_value_t = 1)]
        qty: u32,
    },

    /// Set the quantity of a cart item (values below 1 become 1)
    Update {
        /// Product ID.
        id: String,

        /// New quantity.
        #[arg(allow_hyphen_values = true)]
        qty: i64,
    },

    /// Remove a product from the cart
    Remove {
        /// Product ID.
        id: String,
    },

    /// Empty the cart
    Clear,

    /// Print the number of units in the cart
    Count,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Recipient full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Contact number, digits only.
    #[arg(long)]
    pub phone: Option<String>,

    /// Delivery address.
    #[arg(long)]
    pub address: Option<String>,

    /// Delivery note.
    #[arg(long)]
    pub note: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the track command.
#[derive(Args)]
pub struct TrackArgs {
    /// Tracking code, e.g. ESPR-AB12CD.
    pub code: String,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    /// Show only the most recent N orders.
    #[arg(short, long)]
    pub limit: Option<usize>,
}
