//! Records mirroring one row of the customers and reservations tables
//!
//! Records carry no connection; persistence goes through the stores in
//! [`crate::db`].

pub mod customer;
pub mod reservation;
pub mod validation;

pub use customer::Customer;
pub use reservation::Reservation;
pub use validation::ValidationError;
