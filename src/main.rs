use anyhow::Result;
use clap::Parser;
use log::info;
use std::sync::Arc;

use meme_alert_bot::api::{DexScreenerClient, LiquidityLockChecker};
use meme_alert_bot::cli::Cli;
use meme_alert_bot::config::Config;
use meme_alert_bot::logging;
use meme_alert_bot::metrics;
use meme_alert_bot::notifier::Notifier;
use meme_alert_bot::pipeline::AlertPipeline;
use meme_alert_bot::scheduler::Scheduler;
use meme_alert_bot::telegram::TelegramBot;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.debug)?;
    metrics::init()?;

    let config = Config::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Configuration loading failed: {}", e))?;

    if let Some(address) = cli.check_lock.as_deref() {
        let checker = LiquidityLockChecker::new(&config.solscan)?;
        let locked = checker.is_liquidity_locked(address).await?;
        println!("{}: liquidity {}", address, if locked { "locked" } else { "not locked" });
        return Ok(());
    }

    config.validate()?;
    info!("Configuration loaded successfully.");

    let telegram_bot = TelegramBot::new(&config.telegram.bot_token);
    let source = Arc::new(DexScreenerClient::new(&config.dexscreener)?);
    let notifier = Notifier::new(Arc::new(telegram_bot.sender()), config.chat_id()?);
    let pipeline = AlertPipeline::new(source, notifier, config.filter);

    if cli.once {
        let report = pipeline.run_cycle().await?;
        println!("{}", report);
        return Ok(());
    }

    let scheduler = Scheduler::new(config.schedule.first_run(), config.schedule.interval())?;
    tokio::spawn(async move {
        scheduler.run(|| pipeline.run_cycle()).await;
    });

    info!("Bot is running...");
    telegram_bot.run_commands().await;
    Ok(())
}
