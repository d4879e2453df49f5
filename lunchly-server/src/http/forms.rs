//! Form bodies posted by the customer and reservation pages
//!
//! Every field is optional at the serde level so that a missing field becomes
//! a [`ValidationError`] naming it, instead of an opaque extractor rejection.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::models::{Customer, Reservation, ValidationError};

/// Accepted `startAt` formats; the `T` forms are what `datetime-local` inputs send.
const START_AT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Add / edit customer form
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl CustomerForm {
    /// Build a new, unsaved customer.
    pub fn into_customer(self) -> Result<Customer, ValidationError> {
        let mut customer = Customer::new(String::new(), String::new());
        self.apply_to(&mut customer)?;
        Ok(customer)
    }

    /// Overwrite every mutable field of `customer`. On error `customer` is
    /// left untouched.
    pub fn apply_to(self, customer: &mut Customer) -> Result<(), ValidationError> {
        let first_name = required("firstName", self.first_name)?;
        let last_name = required("lastName", self.last_name)?;

        customer.first_name = first_name;
        customer.last_name = last_name;
        customer.phone = optional(self.phone);
        customer.notes = optional(self.notes);
        Ok(())
    }
}

/// Add reservation form
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    pub num_guests: Option<String>,
    pub start_at: Option<String>,
    pub notes: Option<String>,
}

impl ReservationForm {
    pub fn into_reservation(self, customer_id: i32) -> Result<Reservation, ValidationError> {
        let num_guests = parse_num_guests(&required("numGuests", self.num_guests)?)?;
        let start_at = parse_start_at(&required("startAt", self.start_at)?)?;

        Ok(Reservation {
            id: None,
            customer_id,
            num_guests,
            start_at,
            notes: optional(self.notes),
        })
    }
}

/// Query string of the customer list page
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_num_guests(raw: &str) -> Result<i32, ValidationError> {
    let n: i32 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "numGuests",
        reason: "must be a whole number",
    })?;
    if n < 1 {
        return Err(ValidationError::OutOfRange {
            field: "numGuests",
            min: 1,
        });
    }
    Ok(n)
}

pub fn parse_start_at(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    START_AT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or(ValidationError::InvalidFormat {
            field: "startAt",
            reason: "expected YYYY-MM-DD HH:MM[:SS]",
        })
}
