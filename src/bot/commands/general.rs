//! General Discord commands - ping, help and the navigation menu.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**VenueMaster Help**\n\
        Browse venues, manage your bookings and ask the AI assistant.\n\n\
        **Venues**\n\
        • `/dashboard` - Your overview, or venue search when logged out.\n\
        • `/venues [category] [search]` - Browse venues by category.\n\
        • `/venue <name>` - Venue details and price estimate.\n\
        • `/book [name]` - Book the selected venue.\n\n\
        **Your Bookings** (login required)\n\
        • `/bookings [status]` - All your bookings, newest first.\n\
        • `/calendar [step]` - Month calendar of your bookings.\n\
        • `/booking <id>` - Details of one booking.\n\
        • `/invoice <id>` - Download the invoice of a confirmed booking.\n\n\
        **Account**\n\
        • `/login <mobile>` then `/verify <otp>` - Log in.\n\
        • `/change_mobile` - Start the login over.\n\
        • `/cancel_login` - Close the login without signing in.\n\
        • `/logout` - Log out.\n\n\
        **Other**\n\
        • `/enquiry <start> <end> <requirements>` - Send an event enquiry.\n\
        • `/insight <prompt>` - Ask the AI venue assistant.\n\
        • `/menu` - Show the navigation menu.\n\
        • `/ping` - Checks if the bot is responsive.";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Shows the navigation menu available to you.
    #[poise::command(slash_command, prefix_command)]
    pub async fn menu(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let (items, identity) = ctx
            .data()
            .with_session(ctx.author().id, |session| {
                (
                    session.nav_items(),
                    session.identity().map(str::to_string),
                )
            })
            .await;

        let mut response = String::from("🧭 **VenueMaster**\n\n");
        for item in items {
            writeln!(&mut response, "• {} (`{}`)", item.label, item.view)?;
        }
        match identity {
            Some(name) => writeln!(&mut response, "\n👤 Logged in as **{name}**")?,
            None => writeln!(&mut response, "\n👤 Guest - use `/login` to see your bookings")?,
        }

        ctx.say(response).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
