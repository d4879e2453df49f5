//! Reservation record

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Display format for reservation start times
pub const START_AT_DISPLAY: &str = "%B %-d %Y, %-I:%M %p";

/// A booking made by one customer.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Reservation {
    pub id: Option<i32>,
    pub customer_id: i32,
    pub num_guests: i32,
    pub start_at: NaiveDateTime,
    pub notes: Option<String>,
}

impl Reservation {
    /// New, unsaved reservation for `customer_id`.
    pub fn new(customer_id: i32, num_guests: i32, start_at: NaiveDateTime) -> Self {
        Self {
            id: None,
            customer_id,
            num_guests,
            start_at,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Human-readable start time, e.g. `September 8 2018, 12:20 PM`.
    pub fn formatted_start_at(&self) -> String {
        self.start_at.format(START_AT_DISPLAY).to_string()
    }
}
