//! Unified error types for `VenueMaster`.
//!
//! Every fallible operation in the crate returns [`Result`]. Display-only
//! degradations (unknown venues, AI fallbacks, empty enquiry ranges) are not
//! errors and never reach this type.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// A month outside 1-12 (or an unrepresentable year) was requested
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// Requested year
        year: i32,
        /// Requested month (1-based)
        month: u32,
    },

    /// No venue matches the given id or name
    #[error("Venue not found: {id}")]
    VenueNotFound {
        /// The id or name that was looked up
        id: String,
    },

    /// No booking matches the given id
    #[error("Booking not found: {id}")]
    BookingNotFound {
        /// The booking id that was looked up
        id: String,
    },

    /// Enquiry form failed validation on submit
    #[error("Invalid enquiry: {message}")]
    InvalidEnquiry {
        /// What is missing or wrong
        message: String,
    },

    /// AI insight request failed
    #[error("Insight request failed: {message}")]
    Insight {
        /// Failure details, logged but never shown to users
        message: String,
    },

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
