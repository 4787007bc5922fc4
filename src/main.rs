use dotenvy::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use venue_master::{
    bot::{self, BotData},
    config::{app, users},
    core::{insight::InsightClient, store::MockStore},
    errors::{Error, Result},
};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let config = app::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;
    info!("Successfully processed application configuration.");

    // 4. Seed the demo data relative to today
    let today = bot::today();
    let store = MockStore::seeded(today);
    info!(
        "Seeded {} venues and {} bookings for {today}",
        store.venues().len(),
        store.bookings().len()
    );

    let customers = users::get_customer_names();
    info!("Loaded {} customer mapping(s)", customers.len());

    let insight = InsightClient::from_env(&config.insight);
    if !insight.is_configured() {
        info!("GEMINI_API_KEY not set, /insight will report that the key is missing");
    }

    // 5. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {e}"))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(store, config, customers, insight)).await
}
