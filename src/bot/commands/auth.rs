//! Login Discord commands - mock OTP login and logout.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::notice_text},
        core::session::{Notice, View},
        errors::{Error, Result},
    };

    /// Starts the login: enter your mobile number to receive a code.
    #[poise::command(slash_command, prefix_command)]
    pub async fn login(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Mobile number"] mobile: String,
    ) -> Result<()> {
        let notice = ctx
            .data()
            .with_session(ctx.author().id, |session| {
                if session.is_authenticated() {
                    return None;
                }
                Some(session.request_otp(&mobile))
            })
            .await;

        let reply = match notice {
            None => "ℹ️ You are already logged in.".to_string(),
            Some(Notice::None) => format!(
                "📲 OTP sent to {}. Enter it with `/verify <otp>`.",
                mobile.trim()
            ),
            Some(other) => notice_text(&other).unwrap_or_default(),
        };

        ctx.say(reply).await?;
        Ok(())
    }

    /// Completes the login with the 4-digit code.
    #[poise::command(slash_command, prefix_command)]
    pub async fn verify(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "4-digit OTP"] otp: String,
    ) -> Result<()> {
        let data = ctx.data();
        let identity = data.customer_for(ctx.author().id).to_string();
        let expected = data.config.login.demo_otp.as_str();

        let (notice, view) = data
            .with_session(ctx.author().id, |session| {
                let notice = session.verify_otp(&otp, expected, &identity);
                (notice, session.view())
            })
            .await;

        let mut reply = notice_text(&notice).unwrap_or_default();
        if matches!(notice, Notice::Success(_)) {
            let next = match view {
                View::Calendar => Some("`/calendar`"),
                View::MyBookings => Some("`/bookings`"),
                View::VenueDetails => Some("`/book`"),
                _ => None,
            };
            if let Some(command) = next {
                reply.push_str(&format!("\nContinue with {command}."));
            }
        }

        ctx.say(reply).await?;
        Ok(())
    }

    /// Goes back to entering your mobile number.
    #[poise::command(slash_command, prefix_command)]
    pub async fn change_mobile(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.data()
            .with_session(ctx.author().id, |session| session.login_flow().reset())
            .await;

        ctx.say("↩️ Enter your mobile number again with `/login <mobile>`.")
            .await?;
        Ok(())
    }

    /// Closes the login form without signing in.
    #[poise::command(slash_command, prefix_command)]
    pub async fn cancel_login(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let signed_in = ctx
            .data()
            .with_session(ctx.author().id, |session| {
                session.close_login();
                session.is_authenticated()
            })
            .await;

        let reply = if signed_in {
            "ℹ️ You are already logged in."
        } else {
            "✖️ Login cancelled. Start again any time with `/login <mobile>`."
        };
        ctx.say(reply).await?;
        Ok(())
    }

    /// Logs you out.
    #[poise::command(slash_command, prefix_command)]
    pub async fn logout(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let notice = ctx
            .data()
            .with_session(ctx.author().id, |session| session.logout())
            .await;

        if let Some(text) = notice_text(&notice) {
            ctx.say(text).await?;
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
