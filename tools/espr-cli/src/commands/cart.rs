//! Cart commands.

use anyhow::{bail, Context as _, Result};
use espr_commerce::cart::CartRepository;
use espr_commerce::product::Product;
use espr_commerce::ProductId;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let cart = shop.cart();

    match args.command {
        Some(CartCommand::List) | None => list(cart, ctx),
        Some(CartCommand::Add {
            id,
            name,
            price,
            qty,
        }) => add(cart, ctx, id, name, price, qty),
        Some(CartCommand::Update { id, qty }) => update(cart, ctx, &ProductId::new(id), qty),
        Some(CartCommand::Remove { id }) => {
            if !cart.remove_item(&ProductId::new(id.as_str())) {
                bail!("Failed to save cart");
            }
            ctx.output.success(&format!("Removed {} from cart", id));
            Ok(())
        }
        Some(CartCommand::Clear) => {
            if !cart.clear() {
                bail!("Failed to clear cart");
            }
            ctx.output.success("Cart cleared");
            Ok(())
        }
        Some(CartCommand::Count) => {
            let count = cart.count();
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "count": count }));
            } else {
                println!("{}", count);
            }
            Ok(())
        }
    }
}

fn list(cart: &CartRepository, ctx: &Context) -> Result<()> {
    let items = cart.get_cart();
    let totals = cart.totals();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": items,
            "count": cart.count(),
            "totals": totals,
        }));
        return Ok(());
    }

    ctx.output.header("Your cart");
    if items.is_empty() {
        ctx.output.info("Your cart is empty.");
        ctx.output.info("Add something with `espr cart add --id <id> --name <name> --price <price>`.");
        return Ok(());
    }

    let widths = [16, 28, 5, 12, 12];
    ctx.output
        .table_row(&["ID", "NAME", "QTY", "PRICE", "LINE TOTAL"], &widths);
    for item in &items {
        ctx.output.table_row(
            &[
                item.id.as_str(),
                &item.name,
                &item.quantity.to_string(),
                &item.price.to_string(),
                &item.line_total().to_string(),
            ],
            &widths,
        );
    }
    println!();
    ctx.output.totals(&totals);
    Ok(())
}

fn add(
    cart: &CartRepository,
    ctx: &Context,
    id: String,
    name: String,
    price: f64,
    qty: u32,
) -> Result<()> {
    let product = Product::from_decimal(id, name, price).context("Invalid product")?;
    if !cart.add_item(&product, qty) {
        bail!("Failed to save cart");
    }
    ctx.output.success(&format!(
        "Added {} x {} to cart ({} items)",
        qty.max(1),
        product.name,
        cart.count()
    ));
    Ok(())
}

fn update(cart: &CartRepository, ctx: &Context, id: &ProductId, qty: i64) -> Result<()> {
    if !cart.update_quantity(id, qty) {
        bail!("Product {} is not in the cart, or the cart could not be saved", id);
    }
    if qty < 1 {
        ctx.output.debug(&format!("Quantity {} raised to 1", qty));
    }
    ctx.output
        .success(&format!("Updated {} to quantity {}", id, qty.max(1)));
    Ok(())
}
