//! Espressionist CLI - the storefront's cart, checkout and order tracking
//! from the command line.
//!
//! Commands:
//! - `espr cart` - View and edit the cart
//! - `espr checkout` - Place an order for the cart
//! - `espr track` - Look up an order by tracking code
//! - `espr orders` - List placed orders

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use espr_commerce::CommerceError;

use commands::{CartArgs, CheckoutArgs, OrdersArgs, TrackArgs};

/// Espressionist CLI - cart, checkout and order tracking
#[derive(Parser)]
#[command(name = "espr")]
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

    /// Store file path (overrides `data_file` from the config)
    #[arg(long, global = true)]
    data_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// View and edit the cart
    Cart(CartArgs),

    /// Place an order for everything in the cart
    Checkout(CheckoutArgs),

    /// Look up an order by tracking code
    Track(TrackArgs),

    /// List placed orders
    Orders(OrdersArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(
        cli.config.as_deref(),
        cli.data_file.as_deref(),
        output.clone(),
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.logging, cli.verbose)?;
    match &ctx.config_path {
        Some(path) => tracing::debug!(config = %path.display(), "using config file"),
        None => tracing::debug!("no config file found, using defaults"),
    }
    tracing::debug!(data_file = %ctx.data_file.display(), "context loaded");

    let result = match cli.command {
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Track(args) => commands::track::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        if let Some(hint) = failure_hint(&e) {
            ctx.output.info(hint);
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Extra guidance for failures the user can fix by changing their input.
fn failure_hint(err: &anyhow::Error) -> Option<&'static str> {
    let commerce = err.downcast_ref::<CommerceError>()?;
    if commerce.is_validation() {
        Some("Nothing was saved. Fix the input above and run the command again.")
    } else {
        None
    }
}
