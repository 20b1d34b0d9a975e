//! Command-line surface
//!
//! Each subcommand drives the same controllers a screen would: list pages,
//! the generic modal, the POS terminal, event and order actions, and the
//! navigation store.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use lagoon_client::NetworkHttpClient;

use crate::core::{AlwaysConfirm, Confirm, ConsoleNotifier, DeskConfig, StdinConfirm};

mod actions;
mod form;
mod list;
mod nav;
mod pos;

#[derive(Debug, Parser)]
#[command(name = "lagoon-desk", about = "Front desk, POS and back office for the Lagoon resort API", version)]
pub struct Cli {
    /// REST API base URL
    #[arg(long, global = true, env = "LAGOON_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token
    #[arg(long, global = true, env = "LAGOON_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Value for the X-CSRF-TOKEN header
    #[arg(long, global = true, env = "LAGOON_CSRF_TOKEN", hide_env_values = true)]
    pub csrf_token: Option<String>,

    /// Logs and navigation memory
    #[arg(long, global = true, env = "LAGOON_WORK_DIR")]
    pub work_dir: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub yes: bool,

    /// Show sample rows when a list cannot be loaded
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub samples: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Flags win over the environment
    pub fn apply_to(&self, config: &mut DeskConfig) {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(token) = &self.token {
            config.api_token = Some(token.clone());
        }
        if let Some(csrf) = &self.csrf_token {
            config.csrf_token = Some(csrf.clone());
        }
        if let Some(dir) = &self.work_dir {
            config.work_dir = dir.clone();
        }
        if self.samples {
            config.sample_fallback = true;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a list and print the visible rows
    List(list::ListArgs),
    /// Create a record through its form
    Create(form::CreateArgs),
    /// Update a record through its form
    Update(form::UpdateArgs),
    /// Delete a record after confirmation
    Delete(DeleteArgs),
    /// Build a cart and optionally place the order
    Pos(pos::PosArgs),
    /// Change an order's status or senior discount
    Order(actions::OrderArgs),
    /// Record a payment or change the status of an event
    Event(actions::EventArgs),
    /// Show or change the navigation memory
    Nav(nav::NavArgs),
}

/// Collections a list or delete can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Rooms,
    Bookings,
    Attendance,
    PurchaseOrders,
    Discounts,
    Employees,
    Orders,
    Events,
    Menu,
}

/// Forms `create` and `update` can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormKind {
    Discount,
    Employee,
    PurchaseOrder,
    Attendance,
    Booking,
    Room,
    Event,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub resource: Resource,
    pub id: i64,
}

/// Everything a command needs
pub struct DeskContext {
    pub config: DeskConfig,
    pub client: NetworkHttpClient,
    pub notifier: ConsoleNotifier,
    pub confirm: Box<dyn Confirm>,
}

impl DeskContext {
    pub fn new(config: DeskConfig, assume_yes: bool) -> anyhow::Result<Self> {
        let client = config
            .client_config()
            .build_http_client()
            .context("failed to build HTTP client")?;
        let confirm: Box<dyn Confirm> = if assume_yes {
            Box::new(AlwaysConfirm)
        } else {
            Box::new(StdinConfirm)
        };
        Ok(Self {
            config,
            client,
            notifier: ConsoleNotifier,
            confirm,
        })
    }
}

pub async fn run(command: Command, ctx: &mut DeskContext) -> anyhow::Result<()> {
    match command {
        Command::List(args) => list::run(ctx, args).await,
        Command::Create(args) => form::create(ctx, args).await,
        Command::Update(args) => form::update(ctx, args).await,
        Command::Delete(args) => list::delete(ctx, args.resource, args.id).await,
        Command::Pos(args) => pos::run(ctx, args).await,
        Command::Order(args) => actions::order(ctx, args).await,
        Command::Event(args) => actions::event(ctx, args).await,
        Command::Nav(args) => nav::run(&ctx.config, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "lagoon-desk",
            "--api-url",
            "http://api.test",
            "--work-dir",
            "/tmp/lagoon",
            "--samples",
            "list",
            "rooms",
        ])
        .unwrap();
        let mut config = DeskConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config.api_url, "http://api.test");
        assert_eq!(config.work_dir, PathBuf::from("/tmp/lagoon"));
        assert!(config.sample_fallback);
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
