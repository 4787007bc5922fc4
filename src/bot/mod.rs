//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord front end for `VenueMaster`: slash
//! commands for every view, autocomplete handlers, and the shared bot context
//! holding the venue store and one [`Session`] per Discord user.

/// Discord command implementations (venues, bookings, login, enquiry, insight)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{
    config::{app::AppConfig, users},
    core::{insight::InsightClient, session::Session, store::MockStore},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use poise::serenity_prelude as serenity;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Venues and bookings
    pub store: MockStore,
    /// Settings from config.toml
    pub config: AppConfig,
    /// Discord user ID to customer name
    pub customers: HashMap<String, String>,
    /// Gemini client for `/insight`
    pub insight: InsightClient,
    sessions: RwLock<HashMap<serenity::UserId, Session>>,
}

impl BotData {
    /// Creates the shared context with no sessions yet.
    #[must_use]
    pub fn new(
        store: MockStore,
        config: AppConfig,
        customers: HashMap<String, String>,
        insight: InsightClient,
    ) -> Self {
        Self {
            store,
            config,
            customers,
            insight,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Customer name a Discord user signs in as.
    #[must_use]
    pub fn customer_for(&self, user_id: serenity::UserId) -> &str {
        users::resolve_customer(
            &self.customers,
            &user_id.to_string(),
            &self.config.identity.customer_name,
        )
    }

    /// Runs `f` against the user's session, creating it on first use.
    /// The write lock is held only for the duration of `f`.
    pub async fn with_session<T>(
        &self,
        user_id: serenity::UserId,
        f: impl FnOnce(&mut Session) -> T,
    ) -> T {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(user_id)
            .or_insert_with(|| Session::new(today()));
        f(session)
    }
}

/// The local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {error}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {error}", ctx.command().name);
            if let Err(e) = ctx.say(format!("❌ An error occurred: {error}")).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Connects to Discord and serves commands until the client stops.
///
/// # Errors
/// Returns an error if the client cannot be created or the gateway
/// connection fails.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {e}"))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {e}"))?;
    Ok(())
}

pub use commands::*;
pub use handlers::*;
