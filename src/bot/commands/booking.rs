//! Booking Discord commands - dashboard, bookings list, calendar, booking
//! details and invoice download.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            commands::LOGIN_REQUIRED,
            handlers::autocomplete,
            today,
        },
        core::{
            booking::{StatusFilter, list_bookings},
            calendar::{CalendarMonth, MonthStep},
            invoice::{is_invoiceable, render_invoice},
            report::{
                format_booking_summary, format_calendar_grid, format_rupees, format_status,
                generate_dashboard_report,
            },
            session::{Notice, View},
            venue::CategoryFilter,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Calendar navigation choices.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum CalendarStep {
        #[name = "Previous month"]
        Previous,
        #[name = "Next month"]
        Next,
        #[name = "Today"]
        Today,
    }

    impl From<CalendarStep> for MonthStep {
        fn from(step: CalendarStep) -> Self {
            match step {
                CalendarStep::Previous => Self::Previous,
                CalendarStep::Next => Self::Next,
                CalendarStep::Today => Self::Today,
            }
        }
    }

    // Switches to `view` and returns the signed-in identity, replying with
    // the login prompt when there is none.
    async fn require_login(
        ctx: poise::Context<'_, BotData, Error>,
        view: View,
    ) -> Result<Option<String>> {
        let identity = ctx
            .data()
            .with_session(ctx.author().id, |session| match session.navigate(view) {
                Notice::LoginRequired => None,
                _ => session.identity().map(str::to_string),
            })
            .await;

        if identity.is_none() {
            ctx.say(LOGIN_REQUIRED).await?;
        }
        Ok(identity)
    }

    /// Shows your dashboard, or the venue search when logged out.
    #[poise::command(slash_command, prefix_command)]
    pub async fn dashboard(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Category filter for the venue search"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
        #[description = "Search venues by name or location"] search: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let identity = data
            .with_session(ctx.author().id, |session| {
                session.navigate(View::Dashboard);
                session.identity().map(str::to_string)
            })
            .await;

        let filter = category
            .as_deref()
            .and_then(CategoryFilter::parse)
            .unwrap_or_default();
        let report = generate_dashboard_report(
            &data.store,
            identity.as_deref(),
            filter,
            search.as_deref().unwrap_or_default(),
        );

        let mut embed = serenity::CreateEmbed::default()
            .title("🏠 Dashboard")
            .description(&report.greeting)
            .color(0x0025_63EB);

        for card in &report.cards {
            let value = match card.trend {
                Some(trend) => {
                    let arrow = if card.trend_up { "📈" } else { "⚠️" };
                    format!("**{}**\n{arrow} {trend}", card.value)
                }
                None => format!("**{}**", card.value),
            };
            embed = embed.field(card.title, value, true);
        }

        if identity.is_some() {
            let mut recent = String::new();
            for entry in &report.recent {
                writeln!(
                    &mut recent,
                    "{}",
                    format_booking_summary(entry.booking, entry.venue_name())
                )?;
            }
            if recent.is_empty() {
                recent.push_str("No bookings yet.");
            }
            embed = embed.field("🕒 Recent Bookings", recent, false);
        } else {
            let mut venues = String::new();
            for venue in &report.venues {
                writeln!(
                    &mut venues,
                    "{} **{}** | {} | {}/hr",
                    venue.category.icon(),
                    venue.name,
                    venue.location,
                    format_rupees(venue.hourly_rate)
                )?;
            }
            if venues.is_empty() {
                venues.push_str("No venues found matching your criteria.");
            }
            embed = embed.field("🔎 Venues", venues, false);
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Lists your bookings, newest first.
    #[poise::command(slash_command, prefix_command)]
    pub async fn bookings(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Status filter (all, confirmed, pending, cancelled)"]
        #[autocomplete = "autocomplete::autocomplete_status"]
        status: Option<String>,
    ) -> Result<()> {
        let Some(identity) = require_login(ctx, View::MyBookings).await? else {
            return Ok(());
        };

        let filter = match status.as_deref() {
            Some(value) => match StatusFilter::from_id(value) {
                Some(filter) => filter,
                None => {
                    ctx.say(format!(
                        "❌ Unknown status '{value}'. Use all, confirmed, pending or cancelled."
                    ))
                    .await?;
                    return Ok(());
                }
            },
            None => {
                ctx.data()
                    .with_session(ctx.author().id, |session| session.status_filter())
                    .await
            }
        };
        ctx.data()
            .with_session(ctx.author().id, |session| session.set_status_filter(filter))
            .await;

        let store = &ctx.data().store;
        let listed = list_bookings(store.bookings(), &identity, filter);

        let mut response = format!("📋 **My Bookings** ({filter})\n\n");
        if listed.is_empty() {
            response.push_str("No bookings found.");
        }
        for booking in &listed {
            writeln!(
                &mut response,
                "{}",
                format_booking_summary(booking, store.venue_name(&booking.venue_id))
            )?;
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Shows the month calendar of your bookings.
    #[poise::command(slash_command, prefix_command)]
    pub async fn calendar(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Move the calendar"] step: Option<CalendarStep>,
    ) -> Result<()> {
        let Some(identity) = require_login(ctx, View::Calendar).await? else {
            return Ok(());
        };

        let today = today();
        let month = ctx
            .data()
            .with_session(ctx.author().id, |session| match step {
                Some(step) => session.step_calendar(step.into(), today),
                None => session.calendar_month(),
            })
            .await;

        let store = &ctx.data().store;
        let grid = CalendarMonth::build(store.bookings(), &identity, month, today);

        let mut response = format!(
            "📅 **{month}** ({} booking{})\n",
            grid.booking_count(),
            if grid.booking_count() == 1 { "" } else { "s" }
        );
        writeln!(&mut response, "```\n{}```", format_calendar_grid(&grid))?;

        for day in grid.days.iter().filter(|day| !day.bookings.is_empty()) {
            let capped = day.capped();
            let pills: Vec<String> = capped
                .shown
                .iter()
                .map(|b| {
                    format!(
                        "{} {} (`{}`)",
                        b.status.indicator(),
                        store.venue_name(&b.venue_id),
                        b.id
                    )
                })
                .collect();
            write!(&mut response, "**{}**: {}", day.day, pills.join(", "))?;
            if capped.overflow > 0 {
                write!(&mut response, " +{} more", capped.overflow)?;
            }
            response.push('\n');
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Shows the details of one of your bookings.
    #[poise::command(slash_command, prefix_command)]
    pub async fn booking(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Booking id"]
        #[autocomplete = "autocomplete::autocomplete_booking_id"]
        id: String,
    ) -> Result<()> {
        let Some(identity) = require_login(ctx, View::MyBookings).await? else {
            return Ok(());
        };

        let store = &ctx.data().store;
        let booking = store.customer_booking(&identity, &id)?;

        ctx.data()
            .with_session(ctx.author().id, |session| {
                session.show_booking(&booking.id);
            })
            .await;

        let mut embed = serenity::CreateEmbed::default()
            .title(format!("🎫 Booking {}", booking.id))
            .color(0x0025_63EB)
            .field("🏢 Venue", store.venue_name(&booking.venue_id), false)
            .field("📅 Date", booking.date.format("%A, %B %-d, %Y").to_string(), true)
            .field("⏱️ Duration", format!("{} hours", booking.duration_hours), true)
            .field("📊 Status", format_status(booking.status), true)
            .field("💰 Total", format_rupees(booking.total_price), true);

        if is_invoiceable(booking) {
            embed = embed.footer(serenity::CreateEmbedFooter::new(format!(
                "Use /invoice {} to download the invoice",
                booking.id
            )));
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Downloads the invoice of a confirmed booking.
    #[poise::command(slash_command, prefix_command)]
    pub async fn invoice(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Booking id"]
        #[autocomplete = "autocomplete::autocomplete_booking_id"]
        id: String,
    ) -> Result<()> {
        let Some(identity) = require_login(ctx, View::MyBookings).await? else {
            return Ok(());
        };

        let store = &ctx.data().store;
        let booking = store.customer_booking(&identity, &id)?;

        if !is_invoiceable(booking) {
            ctx.say(format!(
                "ℹ️ Invoices are only available for confirmed bookings. `{}` is {}.",
                booking.id,
                format_status(booking.status)
            ))
            .await?;
            return Ok(());
        }

        let invoice = render_invoice(booking, store.venue_name(&booking.venue_id), today());
        let attachment =
            serenity::CreateAttachment::bytes(invoice.content.into_bytes(), invoice.file_name);

        ctx.send(
            poise::CreateReply::default()
                .content(format!("🧾 Invoice for booking `{}`", booking.id))
                .attachment(attachment),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
