//! Place an order for the cart.

use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use console::Term;
use dialoguer::{Confirm, Input};
use espr_commerce::checkout::ShippingInfo;
use espr_commerce::CommerceError;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let items = shop.cart().get_cart();

    if items.is_empty() {
        bail!("Your cart is empty. Add items with `espr cart add` before checking out.");
    }

    let totals = shop.cart().totals();
    ctx.output.header("Checkout");
    for item in &items {
        ctx.output.list_item(&format!(
            "{} x {} ({})",
            item.quantity,
            item.name,
            item.line_total()
        ));
    }
    ctx.output.totals(&totals);

    let shipping = collect_shipping(&args, ctx)?;
    if let Err(CommerceError::InvalidShipping(errors)) = shipping.validate() {
        for error in &errors {
            ctx.output.warn(&format!("{}: {}", error.field, error.message));
        }
        bail!("Please correct the shipping details and try again");
    }

    if !args.yes && interactive(ctx) {
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", totals.total))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.info("Checkout cancelled.");
            return Ok(());
        }
    }

    let latency = ctx.config.latency_ms;
    if latency > 0 {
        let spinner = ctx.output.spinner("Placing order...");
        tokio::time::sleep(Duration::from_millis(latency)).await;
        spinner.finish_and_clear();
    }

    let order = shop
        .orders()
        .checkout(shipping)
        .context("Failed to place order")?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success("Order placed");
    ctx.output.kv("Tracking code", order.order_id.as_str());
    ctx.output.kv("Total", &order.total.to_string());
    ctx.output.info(&format!(
        "Track your order with `espr track {}`.",
        order.order_id
    ));

    Ok(())
}

/// Take shipping fields from flags, prompting for any that are missing.
fn collect_shipping(args: &CheckoutArgs, ctx: &Context) -> Result<ShippingInfo> {
    let can_prompt = interactive(ctx);
    let mut prompted = false;

    let mut field = |value: &Option<String>, flag: &str, prompt: &str| -> Result<String> {
        if let Some(value) = value {
            return Ok(value.clone());
        }
        if !can_prompt {
            bail!("Missing --{} (no terminal to prompt on)", flag);
        }
        prompted = true;
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        Ok(input)
    };

    let name = field(&args.name, "name", "Full name")?;
    let phone = field(&args.phone, "phone", "Phone number")?;
    let address = field(&args.address, "address", "Delivery address")?;

    let note = match &args.note {
        Some(note) => note.clone(),
        None if prompted => Input::<String>::new()
            .with_prompt("Note for the rider (optional)")
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };

    Ok(ShippingInfo::new(name, phone, address).with_note(note))
}

fn interactive(ctx: &Context) -> bool {
    !ctx.output.is_json() && Term::stdout().is_term()
}
