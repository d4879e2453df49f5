//! Store implementations for database access
//!
//! Each store borrows the pool and follows these patterns:
//! - Values are always bound parameters, never interpolated
//! - Column aliases map rows straight onto the records in `crate::models`
//! - Reads return owned records; nothing is cached between calls

pub mod customers;
pub mod reservations;

pub use customers::{CustomerStore, DEFAULT_TOP_LIMIT};
pub use reservations::ReservationStore;
