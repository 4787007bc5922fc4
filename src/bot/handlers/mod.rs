//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions such as autocomplete.

/// Autocomplete handlers for venue names, categories, booking ids and statuses
pub mod autocomplete;
