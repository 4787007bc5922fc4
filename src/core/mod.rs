//! Framework-agnostic business logic.
//!
//! Nothing here knows about Discord; the bot layer only renders what these
//! modules return.

pub mod auth;
pub mod booking;
pub mod calendar;
pub mod enquiry;
pub mod insight;
pub mod invoice;
pub mod placement;
pub mod report;
pub mod session;
pub mod store;
pub mod venue;
