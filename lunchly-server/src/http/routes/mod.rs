//! Route handlers organized by resource

pub mod customers;
pub mod health;
pub mod reservations;
