//! Enquiry form business logic.
//!
//! Users pick an event date range, adjust a time slot per day and describe
//! their requirements. Ranges that are inverted or longer than
//! [`MAX_RANGE_DAYS`] produce no dates, which hides the schedule section
//! instead of raising an error.

use crate::errors::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Longest accepted span between start and end date, in days.
pub const MAX_RANGE_DAYS: i64 = 30;

/// Start and end time for one event day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    /// Start time
    pub start: NaiveTime,
    /// End time
    pub end: NaiveTime,
}

impl Default for TimeSlot {
    /// Business hours, 09:00 to 17:00.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
        }
    }
}

/// Which end of a slot to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotField {
    /// Start time
    Start,
    /// End time
    End,
}

/// Every date from `start` to `end` inclusive.
///
/// Empty when either bound is missing, when `start` is after `end`, or when
/// the span exceeds [`MAX_RANGE_DAYS`].
#[must_use]
pub fn dates_in_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<NaiveDate> {
    let (Some(start), Some(end)) = (start, end) else {
        return Vec::new();
    };
    if (end - start).num_days().abs() > MAX_RANGE_DAYS || start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|date| *date <= end).collect()
}

/// A submitted enquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryReceipt {
    /// Requested days with their time slots, in date order
    pub schedule: Vec<(NaiveDate, TimeSlot)>,
    /// Free-text requirements
    pub requirements: String,
}

/// In-progress enquiry form.
#[derive(Debug, Clone, Default)]
pub struct EnquiryForm {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    requirements: String,
    slots: BTreeMap<NaiveDate, TimeSlot>,
}

impl EnquiryForm {
    /// Sets both ends of the date range.
    pub fn set_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.start = start;
        self.end = end;
        self.refresh_slots();
    }

    /// Sets the last event date.
    pub fn set_end(&mut self, end: NaiveDate) {
        self.set_range(self.start, Some(end));
    }

    /// Replaces the requirements text.
    pub fn set_requirements(&mut self, requirements: impl Into<String>) {
        self.requirements = requirements.into();
    }

    /// Dates currently covered by the range.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        dates_in_range(self.start, self.end)
    }

    /// Slots for the dates in range, in date order.
    #[must_use]
    pub fn schedule(&self) -> Vec<(NaiveDate, TimeSlot)> {
        self.dates()
            .into_iter()
            .map(|date| (date, self.slots.get(&date).copied().unwrap_or_default()))
            .collect()
    }

    // Keeps slots of dates still in range, defaults the new ones. An empty
    // range leaves the slots alone so widening it again restores them.
    fn refresh_slots(&mut self) {
        let dates = self.dates();
        if dates.is_empty() {
            return;
        }
        self.slots = dates
            .into_iter()
            .map(|date| (date, self.slots.get(&date).copied().unwrap_or_default()))
            .collect();
    }

    /// Changes one end of the slot for `date`. Returns `false` when `date`
    /// is not part of the range.
    pub fn set_time(&mut self, date: NaiveDate, field: SlotField, time: NaiveTime) -> bool {
        if !self.dates().contains(&date) {
            return false;
        }
        let slot = self.slots.entry(date).or_default();
        match field {
            SlotField::Start => slot.start = time,
            SlotField::End => slot.end = time,
        }
        true
    }

    /// Copies the first day's slot onto every day of the range.
    pub fn apply_first_to_all(&mut self) {
        let dates = self.dates();
        let Some(first) = dates.first() else {
            return;
        };
        let template = self.slots.get(first).copied().unwrap_or_default();
        self.slots = dates.into_iter().map(|date| (date, template)).collect();
    }

    /// Validates and submits the form.
    ///
    /// # Errors
    /// [`Error::InvalidEnquiry`] when there are no valid dates, the start is
    /// before `today`, the requirements are blank, or a slot ends before it
    /// starts.
    pub fn submit(&self, today: NaiveDate) -> Result<EnquiryReceipt> {
        let schedule = self.schedule();
        let Some((first, _)) = schedule.first() else {
            return Err(invalid(format!(
                "choose a start and end date no more than {MAX_RANGE_DAYS} days apart"
            )));
        };
        if *first < today {
            return Err(invalid("event dates cannot be in the past".to_string()));
        }
        if self.requirements.trim().is_empty() {
            return Err(invalid("please describe your requirements".to_string()));
        }
        if let Some((date, _)) = schedule.iter().find(|(_, slot)| slot.end <= slot.start) {
            return Err(invalid(format!(
                "end time must be after start time on {}",
                date.format("%a, %b %-d")
            )));
        }

        Ok(EnquiryReceipt {
            schedule,
            requirements: self.requirements.trim().to_string(),
        })
    }

    /// Clears the form for another enquiry.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidEnquiry { message }
}
