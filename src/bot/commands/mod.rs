//! Discord command implementations organized by view.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Login, verification and logout
pub mod auth;

/// Dashboard, bookings list, calendar and invoices
pub mod booking;

/// Enquiry / help form
pub mod enquiry;

/// General utility commands
pub mod general;

/// AI assistant
pub mod insight;

/// Venue browsing, details and booking
pub mod venue;

// Export commands
pub use auth::*;
pub use booking::*;
pub use enquiry::*;
pub use general::*;
pub use insight::*;
pub use venue::*;

use crate::{bot::BotData, core::session::Notice, errors::Error};

/// Every command the bot registers.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![
        ping(),
        help(),
        menu(),
        dashboard(),
        venues(),
        venue(),
        book(),
        bookings(),
        calendar(),
        booking(),
        invoice(),
        login(),
        verify(),
        change_mobile(),
        cancel_login(),
        logout(),
        enquiry(),
        insight(),
    ]
}

/// Reply shown when a command needs a signed-in user.
pub const LOGIN_REQUIRED: &str =
    "🔒 Please log in first: `/login <mobile>` and then `/verify <otp>`.";

/// Text for a session notice, `None` when there is nothing to say.
#[must_use]
pub fn notice_text(notice: &Notice) -> Option<String> {
    match notice {
        Notice::Success(message) => Some(format!("✅ {message}")),
        Notice::LoginRequired => Some(LOGIN_REQUIRED.to_string()),
        Notice::LoginFailed(error) => Some(format!("❌ {error}")),
        Notice::None => None,
    }
}
