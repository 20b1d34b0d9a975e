use clap::Parser;
use lagoon_desk::commands::{self, Cli, DeskContext};
use lagoon_desk::core::DeskConfig;
use lagoon_desk::core::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    DeskConfig::load_dotenv();
    let cli = Cli::parse();

    let mut config = DeskConfig::from_env()?;
    cli.apply_to(&mut config);
    let _guard = init_logging(&config.log_dir(), config.log_filter.as_deref())?;

    tracing::debug!(api_url = %config.api_url, "starting");
    let mut ctx = DeskContext::new(config, cli.yes)?;
    if let Err(e) = commands::run(cli.command, &mut ctx).await {
        tracing::error!("{e:#}");
        return Err(e);
    }
    Ok(())
}
