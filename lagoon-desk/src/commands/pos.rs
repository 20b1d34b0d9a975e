use anyhow::bail;
use clap::Args;
use shared::money::{format_currency, SeniorRule};

use super::DeskContext;
use crate::pos::{CartLine, Destination, PosTerminal};

#[derive(Debug, Args)]
pub struct PosArgs {
    /// `id:name:price[:qty]`, repeatable
    #[arg(long = "item", value_name = "ID:NAME:PRICE[:QTY]", value_parser = parse_line, required = true)]
    pub items: Vec<CartLine>,

    /// Apply the senior citizen discount
    #[arg(long)]
    pub senior: bool,

    #[arg(long)]
    pub customer: Option<String>,

    #[arg(long, conflicts_with = "table")]
    pub room: Option<String>,

    #[arg(long)]
    pub table: Option<String>,

    /// Place the order instead of only pricing it
    #[arg(long)]
    pub checkout: bool,
}

fn parse_line(raw: &str) -> Result<CartLine, String> {
    let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
    let (id, name, price, qty) = match parts.as_slice() {
        [id, name, price] => (id, name, price, "1"),
        [id, name, price, qty] => (id, name, price, *qty),
        _ => return Err(format!("expected ID:NAME:PRICE[:QTY], got {raw:?}")),
    };
    let id = id.parse().map_err(|_| format!("bad menu item id {id:?}"))?;
    let price: f64 = price.parse().map_err(|_| format!("bad price {price:?}"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(format!("bad price {price}"));
    }
    let quantity = qty.parse().map_err(|_| format!("bad quantity {qty:?}"))?;
    Ok(CartLine::new(id, *name, price, quantity))
}

pub async fn run(ctx: &mut DeskContext, args: PosArgs) -> anyhow::Result<()> {
    let mut terminal = PosTerminal::new();
    for line in args.items {
        terminal.cart_mut().add_line(line)?;
    }
    terminal.cart_mut().set_senior(args.senior);
    if let Some(customer) = args.customer {
        terminal.set_customer(customer);
    }
    terminal.set_destination(match (args.room, args.table) {
        (Some(room), _) => Some(Destination::Room(room)),
        (None, Some(table)) => Some(Destination::Table(table)),
        (None, None) => None,
    });

    for line in terminal.cart().lines() {
        println!(
            "{:>3} × {:<24} {:>12}",
            line.quantity,
            line.name,
            format_currency(line.line_total())
        );
    }
    let (subtotal, discount, total) = terminal.summary();
    println!("Subtotal {:>30}", format_currency(subtotal));
    if terminal.cart().is_senior() {
        println!(
            "Senior discount ({:.0}%) {:>20}",
            SeniorRule::PointOfSale.rate() * 100.0,
            format_currency(-discount)
        );
    }
    println!("Total {:>33}", format_currency(total));

    if args.checkout {
        let placed = terminal.checkout(&ctx.client, &ctx.notifier).await?;
        println!("Order #{} placed", placed.id);
    } else if terminal.cart().is_empty() {
        bail!("cart is empty");
    }
    Ok(())
}
