//! Venue Discord commands - browse, details and booking.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::notice_text, handlers::autocomplete},
        core::{
            report::format_rupees,
            session::View,
            venue::{
                CategoryFilter, ESTIMATE_HOURS, amenity_preview, category_title, estimate_price,
                long_description, search_venues, venue_for_details,
            },
        },
        entities::Venue,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    fn venue_card(venue: &Venue) -> Result<String> {
        let (amenities, hidden) = amenity_preview(venue);
        let mut card = String::new();
        writeln!(
            &mut card,
            "📍 {} | 👥 {} | 💰 {}/hr | {}",
            venue.location,
            venue.capacity,
            format_rupees(venue.hourly_rate),
            venue.status
        )?;
        write!(&mut card, "✨ {}", amenities.join(", "))?;
        if hidden > 0 {
            write!(&mut card, " +{hidden}")?;
        }
        Ok(card)
    }

    /// Lists venues, optionally narrowed by category and a search term.
    #[poise::command(slash_command, prefix_command)]
    pub async fn venues(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Category (indoor, outdoor, hall, pool, classroom or all)"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
        #[description = "Search by name or location"] search: Option<String>,
    ) -> Result<()> {
        let filter = match category.as_deref() {
            None => CategoryFilter::All,
            Some(value) => {
                let Some(filter) = CategoryFilter::parse(value) else {
                    ctx.say(format!(
                        "❌ Unknown category '{value}'. Try indoor, outdoor, hall, pool or classroom."
                    ))
                    .await?;
                    return Ok(());
                };
                filter
            }
        };

        if let CategoryFilter::Only(category) = filter {
            ctx.data()
                .with_session(ctx.author().id, |session| {
                    session.navigate(View::Category(category))
                })
                .await;
        }

        let term = search.unwrap_or_default();
        let found = search_venues(ctx.data().store.venues(), filter, &term);

        let title = match filter {
            CategoryFilter::All => "🏢 All Venues".to_string(),
            CategoryFilter::Only(category) => {
                format!("{} {}", category.icon(), category_title(category))
            }
        };

        if found.is_empty() {
            ctx.say(format!("{title}\n\nNo venues found matching your criteria."))
                .await?;
            return Ok(());
        }

        let mut fields = Vec::with_capacity(found.len());
        for venue in &found {
            fields.push((
                format!("{} {}", venue.category.icon(), venue.name),
                venue_card(venue)?,
                false,
            ));
        }

        let embed = serenity::CreateEmbed::default()
            .title(title)
            .color(0x0025_63EB)
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} venue{} | /venue <name> for details",
                found.len(),
                if found.len() == 1 { "" } else { "s" }
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows the details of a venue with a price estimate.
    #[poise::command(slash_command, prefix_command)]
    pub async fn venue(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Venue name"]
        #[autocomplete = "autocomplete::autocomplete_venue_name"]
        name: Option<String>,
    ) -> Result<()> {
        let store = &ctx.data().store;

        let selected_id = match name.as_deref() {
            Some(name) => Some(store.venue_by_name(name)?.id.clone()),
            None => {
                ctx.data()
                    .with_session(ctx.author().id, |session| {
                        session.selected_venue().map(str::to_string)
                    })
                    .await
            }
        };

        let Some(venue) = venue_for_details(store.venues(), selected_id.as_deref()) else {
            ctx.say("📭 No venues available.").await?;
            return Ok(());
        };

        ctx.data()
            .with_session(ctx.author().id, |session| session.view_venue(&venue.id))
            .await;

        let embed = serenity::CreateEmbed::default()
            .title(format!("{} {}", venue.category.icon(), venue.name))
            .description(long_description(venue))
            .color(0x0025_63EB)
            .field("📍 Location", &venue.location, true)
            .field("👥 Capacity", format!("{} guests", venue.capacity), true)
            .field("📊 Status", venue.status.to_string(), true)
            .field("✨ Amenities", venue.amenities.join(", "), false)
            .field(
                "💰 Price",
                format!(
                    "{}/hr | Estimated total ({ESTIMATE_HOURS} hrs): **{}**",
                    format_rupees(venue.hourly_rate),
                    format_rupees(estimate_price(venue, ESTIMATE_HOURS))
                ),
                false,
            )
            .footer(serenity::CreateEmbedFooter::new("Use /book to book this venue"));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Books the selected venue (demo only, nothing is stored).
    #[poise::command(slash_command, prefix_command)]
    pub async fn book(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Venue name (defaults to the venue you last viewed)"]
        #[autocomplete = "autocomplete::autocomplete_venue_name"]
        name: Option<String>,
    ) -> Result<()> {
        let store = &ctx.data().store;

        let venue_id = match name.as_deref() {
            Some(name) => Some(store.venue_by_name(name)?.id.clone()),
            None => None,
        };

        let notice = ctx
            .data()
            .with_session(ctx.author().id, |session| {
                if let Some(id) = &venue_id {
                    session.view_venue(id);
                } else if session.selected_venue().is_none() {
                    return None;
                }
                Some(session.book_selected())
            })
            .await;

        let Some(notice) = notice else {
            ctx.say("ℹ️ Pick a venue first with `/venue <name>` or `/book <name>`.")
                .await?;
            return Ok(());
        };

        if let Some(text) = notice_text(&notice) {
            ctx.say(text).await?;
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
