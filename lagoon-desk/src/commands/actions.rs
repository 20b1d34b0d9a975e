use anyhow::{anyhow, bail};
use clap::{Args, ValueEnum};
use lagoon_client::api;
use shared::money::format_currency;
use shared::status::{OrderStatus, StatusLookup};

use super::DeskContext;
use crate::events::{self, EventAction};
use crate::pages::Listable;
use crate::pos::{self, OrderAdjustment};

#[derive(Debug, Args)]
pub struct OrderArgs {
    pub id: i64,

    /// pending, processing, completed or cancelled
    #[arg(long)]
    pub status: Option<String>,

    /// Turn the senior discount on or off
    #[arg(long)]
    pub senior: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventCommand {
    Deposit,
    Paid,
    Confirm,
    Cancel,
}

#[derive(Debug, Args)]
pub struct EventArgs {
    pub id: i64,
    pub action: EventCommand,

    /// Deposit amount
    #[arg(long, required_if_eq("action", "deposit"))]
    pub amount: Option<f64>,
}

pub async fn order(ctx: &mut DeskContext, args: OrderArgs) -> anyhow::Result<()> {
    let next = args
        .status
        .as_deref()
        .map(|raw| OrderStatus::from_wire(raw).ok_or_else(|| anyhow!("unknown order status {raw:?}")))
        .transpose()?;
    if next.is_none() && args.senior.is_none() {
        bail!("nothing to change; pass --status and/or --senior");
    }

    let orders = api::orders::list(&ctx.client).await?;
    let current = orders
        .into_iter()
        .find(|o| o.id == args.id)
        .ok_or_else(|| anyhow!("order {} not found", args.id))?;

    let updated = match args.senior {
        None => {
            let next = next.ok_or_else(|| anyhow!("missing status"))?;
            pos::change_status(&ctx.client, &ctx.notifier, &current, next).await?
        }
        Some(senior) => {
            let mut adjustment = OrderAdjustment::new(current);
            adjustment.set_senior(senior);
            if let Some(next) = next {
                adjustment.set_status(next)?;
            }
            println!(
                "Subtotal {}  Discount {}  Total {}",
                format_currency(adjustment.subtotal()),
                format_currency(adjustment.discount()),
                format_currency(adjustment.total())
            );
            adjustment.submit(&ctx.client, &ctx.notifier).await?
        }
    };
    println!("{}", updated.display_row());
    Ok(())
}

pub async fn event(ctx: &mut DeskContext, args: EventArgs) -> anyhow::Result<()> {
    let all = api::events::list(&ctx.client).await?;
    let current = all
        .into_iter()
        .find(|e| e.id == args.id)
        .ok_or_else(|| anyhow!("event {} not found", args.id))?;

    let action = match args.action {
        EventCommand::Deposit => EventAction::RecordDeposit {
            amount: args.amount.ok_or_else(|| anyhow!("--amount is required"))?,
        },
        EventCommand::Paid => EventAction::MarkFullyPaid,
        EventCommand::Confirm => EventAction::Confirm,
        EventCommand::Cancel => EventAction::Cancel,
    };
    let updated = events::apply(&ctx.client, &ctx.notifier, &current, action).await?;
    println!("{}", updated.display_row());
    Ok(())
}
