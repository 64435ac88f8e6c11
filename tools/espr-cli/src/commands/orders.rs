//! Order listing.

use anyhow::{Context as _, Result};

use super::OrdersArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let mut orders = shop
        .orders()
        .try_orders()
        .context("Failed to read orders")?;

    // Newest first
    orders.reverse();
    if let Some(limit) = args.limit {
        orders.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    ctx.output.header("Orders");
    if orders.is_empty() {
        ctx.output.info("No orders placed yet.");
        return Ok(());
    }

    let widths = [14, 18, 20, 6, 12, 10];
    ctx.output.table_row(
        &["TRACKING", "DATE", "CUSTOMER", "ITEMS", "TOTAL", "STATUS"],
        &widths,
    );
    for order in &orders {
        ctx.output.table_row(
            &[
                order.order_id.as_str(),
                &order.date.format("%Y-%m-%d %H:%M").to_string(),
                &order.shipping.name,
                &order.item_count().to_string(),
                &order.total.to_string(),
                &status_badge(order.status),
            ],
            &widths,
        );
    }

    Ok(())
}
