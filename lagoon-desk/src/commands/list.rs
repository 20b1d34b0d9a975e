use anyhow::bail;
use clap::Args;
use serde::de::DeserializeOwned;
use shared::models::{
    AttendanceRecord, Booking, Discount, Employee, Event, MenuItem, Order, PurchaseOrder, Room,
};

use super::{DeskContext, Resource};
use crate::pages::{DataSource, ListPage, Listable, StatusFilter};

#[derive(Debug, Args)]
pub struct ListArgs {
    pub resource: Resource,

    /// Status to keep; `all` keeps everything
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Case-insensitive text search
    #[arg(long, default_value = "")]
    pub search: String,

    /// Field to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

pub async fn run(ctx: &mut DeskContext, args: ListArgs) -> anyhow::Result<()> {
    match args.resource {
        Resource::Rooms => show::<Room>(ctx, &args).await,
        Resource::Bookings => show::<Booking>(ctx, &args).await,
        Resource::Attendance => show::<AttendanceRecord>(ctx, &args).await,
        Resource::PurchaseOrders => show::<PurchaseOrder>(ctx, &args).await,
        Resource::Discounts => show::<Discount>(ctx, &args).await,
        Resource::Employees => show::<Employee>(ctx, &args).await,
        Resource::Orders => show::<Order>(ctx, &args).await,
        Resource::Events => show::<Event>(ctx, &args).await,
        Resource::Menu => show::<MenuItem>(ctx, &args).await,
    }
}

async fn show<R>(ctx: &DeskContext, args: &ListArgs) -> anyhow::Result<()>
where
    R: Listable + DeserializeOwned,
{
    let mut page = ListPage::<R>::new().with_sample_fallback(ctx.config.sample_fallback);
    let source = page.load(&ctx.client, &ctx.notifier).await?;

    page.set_filter(StatusFilter::parse(&args.status));
    page.set_search(args.search.as_str());
    if let Some(field) = &args.sort {
        if !R::SORT_FIELDS.contains(&field.as_str()) {
            bail!(
                "cannot sort {} by {field:?}; choose one of: {}",
                R::NOUN.to_lowercase(),
                R::SORT_FIELDS.join(", ")
            );
        }
        page.sort_by(field);
        if args.desc {
            page.sort_by(field);
        }
    }

    let rows = page.visible();
    if source == DataSource::Sample {
        println!("(sample data, not saved anywhere)");
    }
    for row in &rows {
        println!("{}", row.display_row());
    }
    println!("{} of {} shown", rows.len(), page.records().len());

    let counts = page.status_counts();
    if !counts.is_empty() {
        let summary: Vec<String> = counts.iter().map(|(k, n)| format!("{k}: {n}")).collect();
        println!("{}", summary.join("  "));
    }
    Ok(())
}

pub async fn delete(ctx: &mut DeskContext, resource: Resource, id: i64) -> anyhow::Result<()> {
    let deleted = match resource {
        Resource::Rooms => remove::<Room>(ctx, id).await?,
        Resource::Bookings => remove::<Booking>(ctx, id).await?,
        Resource::Attendance => remove::<AttendanceRecord>(ctx, id).await?,
        Resource::PurchaseOrders => remove::<PurchaseOrder>(ctx, id).await?,
        Resource::Discounts => remove::<Discount>(ctx, id).await?,
        Resource::Employees => remove::<Employee>(ctx, id).await?,
        Resource::Orders => remove::<Order>(ctx, id).await?,
        Resource::Events => remove::<Event>(ctx, id).await?,
        Resource::Menu => remove::<MenuItem>(ctx, id).await?,
    };
    if !deleted {
        println!("Nothing deleted");
    }
    Ok(())
}

async fn remove<R: Listable>(ctx: &DeskContext, id: i64) -> anyhow::Result<bool> {
    let mut page = ListPage::<R>::new();
    Ok(page
        .delete(id, ctx.confirm.as_ref(), &ctx.client, &ctx.notifier)
        .await?)
}
