//! Enquiry Discord command - event enquiry with per-day time slots.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, today},
        core::{
            enquiry::SlotField,
            session::View,
        },
        errors::{Error, Result},
    };
    use chrono::{NaiveDate, NaiveTime};
    use std::fmt::Write;

    fn parse_date(value: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidEnquiry {
            message: format!("'{value}' is not a date, use YYYY-MM-DD"),
        })
    }

    fn parse_time(value: &str) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| Error::InvalidEnquiry {
            message: format!("'{value}' is not a time, use HH:MM"),
        })
    }

    /// Sends an event enquiry for a date range of up to 30 days.
    #[poise::command(slash_command, prefix_command)]
    pub async fn enquiry(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "First event date (YYYY-MM-DD)"] start_date: String,
        #[description = "Last event date (YYYY-MM-DD)"] end_date: String,
        #[description = "Describe your event and requirements"] requirements: String,
        #[description = "Start time for every day (HH:MM, default 09:00)"]
        start_time: Option<String>,
        #[description = "End time for every day (HH:MM, default 17:00)"]
        end_time: Option<String>,
    ) -> Result<()> {
        let start = parse_date(&start_date)?;
        let end = parse_date(&end_date)?;
        let start_time = start_time.as_deref().map(parse_time).transpose()?;
        let end_time = end_time.as_deref().map(parse_time).transpose()?;

        let today = today();
        let receipt = ctx
            .data()
            .with_session(ctx.author().id, |session| {
                session.navigate(View::Enquiry);
                let form = session.enquiry_mut();
                form.reset();
                form.set_range(Some(start), Some(end));
                form.set_requirements(requirements.as_str());
                if let Some(first) = form.dates().first().copied() {
                    if let Some(time) = start_time {
                        form.set_time(first, SlotField::Start, time);
                    }
                    if let Some(time) = end_time {
                        form.set_time(first, SlotField::End, time);
                    }
                    form.apply_first_to_all();
                }
                let receipt = form.submit(today);
                if receipt.is_ok() {
                    form.reset();
                }
                receipt
            })
            .await;

        let receipt = match receipt {
            Ok(receipt) => receipt,
            Err(Error::InvalidEnquiry { message }) => {
                ctx.say(format!("❌ Could not send enquiry: {message}."))
                    .await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let mut response =
            String::from("📨 **Enquiry sent!** Our team will get back to you shortly.\n\n");
        for (date, slot) in &receipt.schedule {
            writeln!(
                &mut response,
                "• {} | {} - {}",
                date.format("%a, %b %-d"),
                slot.start.format("%H:%M"),
                slot.end.format("%H:%M")
            )?;
        }
        writeln!(&mut response, "\n📝 {}", receipt.requirements)?;

        ctx.say(response).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
