//! AI assistant Discord command.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Asks the AI venue assistant for advice, descriptions or schedules.
    #[poise::command(slash_command, prefix_command)]
    pub async fn insight(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "What would you like to know?"]
        #[rest]
        prompt: String,
    ) -> Result<()> {
        // Model calls can take longer than Discord's 3 second window
        ctx.defer().await?;

        let answer = ctx.data().insight.generate_venue_insight(&prompt).await;

        ctx.say(format!("🤖 {answer}")).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
