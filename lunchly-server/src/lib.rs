//! lunchly-server: customers, reservations and the pages that manage them
//!
//! The data-access core lives in [`db`] (one store per table), the records in
//! [`models`], and the server-rendered pages in [`http`].

pub mod db;
pub mod http;
pub mod models;

pub use db::{CustomerStore, ReservationStore, StoreError, StoreErrorKind};
pub use models::{Customer, Reservation, ValidationError};
