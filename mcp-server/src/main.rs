use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use lottery_lib::config;
use lottery_lib::database::open_database;
use lottery_lib::fetcher::SanookFetcher;
use lottery_lib::service::LotteryService;
use lottery_mcp::mcp_handler::{MCPHandler, stdio};
use lottery_mcp::use_cases::LotteryUseCase;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Let's check your lottery numbers.");

    let db_conn = open_database(&config.database_url)?;
    let fetcher = SanookFetcher::new(&config)?;

    let service = LotteryService::new(Arc::new(db_conn), Arc::new(fetcher))
        .with_batch_delay(Duration::from_millis(config.batch_delay_ms));

    let lottery_use_case = LotteryUseCase::new(Arc::new(service));
    let handler = MCPHandler::new(Arc::new(lottery_use_case));

    let (reader, writer) = stdio();

    handler.serve(reader, writer).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    Ok(())
}
