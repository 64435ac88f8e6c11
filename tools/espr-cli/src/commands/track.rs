//! Order tracking.

use anyhow::{bail, Result};
use espr_commerce::checkout::sanitize_tracking_code;

use super::TrackArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the track command.
pub async fn run(args: TrackArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let tracking = shop.orders().tracking();

    let code = sanitize_tracking_code(&args.code);
    if code.is_empty() {
        bail!("Please enter a tracking code");
    }
    if !tracking.is_well_formed(&code) {
        bail!(
            "Invalid tracking code format. Codes look like {}",
            tracking.example()
        );
    }

    let Some(order) = shop.orders().find_order(&code) else {
        bail!("Order {} not found. Check the code and try again.", code);
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "order": order,
            "totals": order.totals(),
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Order {}", order.order_id));
    ctx.output.kv("Status", &status_badge(order.status));
    ctx.output.kv(
        "Placed",
        &order.date.format("%B %-d, %Y %H:%M UTC").to_string(),
    );

    ctx.output.header("Shipping");
    ctx.output.kv("Name", &order.shipping.name);
    ctx.output.kv("Phone", &order.shipping.phone);
    ctx.output.kv("Address", &order.shipping.address);
    if !order.shipping.note.is_empty() {
        ctx.output.kv("Note", &order.shipping.note);
    }

    ctx.output.header("Items");
    for item in &order.cart {
        ctx.output.list_item(&format!(
            "{} x {} @ {} = {}",
            item.quantity,
            item.name,
            item.price,
            item.line_total()
        ));
    }
    println!();
    ctx.output.totals(&order.totals());

    if !order.status.is_terminal() {
        ctx.output
            .info("This order is still in progress. Track it again later for updates.");
    }

    Ok(())
}
