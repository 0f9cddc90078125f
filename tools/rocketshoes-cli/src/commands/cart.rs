//! Cart commands.

use anyhow::Result;
use rocketshoes_commerce::cart::{Cart, CartStore, UpdateProductAmount};
use rocketshoes_commerce::Currency;

use super::{AddArgs, NoticeShown, RemoveArgs, ShowArgs, UpdateArgs};
use crate::context::Context;

const WIDTHS: [usize; 5] = [6, 36, 12, 5, 12];

/// Run the show command.
pub async fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let currency = ctx.config.display.currency()?;
    let store = ctx.open_store()?;
    let cart = store.cart().await;
    let summary = cart.summary(currency)?;

    if ctx.output.is_json() {
        if args.summary {
            ctx.output.json(&summary);
        } else {
            ctx.output.json(&serde_json::json!({ "cart": cart, "summary": summary }));
        }
        return Ok(());
    }

    ctx.output.header("Cart");
    if !args.summary {
        if cart.is_empty() {
            ctx.output.info("Your cart is empty");
        } else {
            print_entries(&cart, currency, ctx)?;
        }
    }

    ctx.output.info("");
    ctx.output.kv("Products", &summary.distinct_items.to_string());
    ctx.output.kv("Items", &summary.total_quantity.to_string());
    ctx.output.kv("Subtotal", &summary.subtotal.display());

    Ok(())
}

/// Run the add command.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let id = args.product_id;

    let spinner = ctx.output.spinner(&format!("Adding product {}...", id));
    let result = store.add_product(id).await;
    spinner.finish_and_clear();
    result.map_err(NoticeShown)?;

    let amount = store.cart().await.amount_of(id);
    ctx.output.success(&format!("Product {} in cart (quantity {})", id, amount));
    print_json(&store, ctx).await;
    Ok(())
}

/// Run the remove command.
pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let id = args.product_id;

    store.remove_product(id).await.map_err(NoticeShown)?;

    ctx.output.success(&format!("Removed product {}", id));
    print_json(&store, ctx).await;
    Ok(())
}

/// Run the update command.
pub async fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let id = args.product_id;

    if args.amount <= 0 {
        ctx.output.warn(&format!("Ignoring quantity {}", args.amount));
    }

    let spinner = ctx.output.spinner(&format!("Updating product {}...", id));
    let result = store
        .update_product_amount(UpdateProductAmount {
            product_id: id,
            amount: args.amount,
        })
        .await;
    spinner.finish_and_clear();
    result.map_err(NoticeShown)?;

    if args.amount > 0 {
        let cart = store.cart().await;
        if cart.contains(id) {
            ctx.output.success(&format!("Product {} quantity set to {}", id, args.amount));
        } else {
            ctx.output.warn(&format!("Product {} is not in the cart", id));
        }
    }
    print_json(&store, ctx).await;
    Ok(())
}

fn print_entries(cart: &Cart, currency: Currency, ctx: &Context) -> Result<()> {
    ctx.output
        .table_row(&["ID", "PRODUCT", "PRICE", "QTY", "TOTAL"], &WIDTHS);
    for entry in cart {
        let id = entry.id().to_string();
        let price = entry.product.unit_price(currency).display();
        let amount = entry.amount.to_string();
        let total = entry.line_total(currency)?.display();
        ctx.output.table_row(
            &[&id, &entry.product.title, &price, &amount, &total],
            &WIDTHS,
        );
    }
    Ok(())
}

async fn print_json(store: &CartStore, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&store.cart().await);
    }
}
