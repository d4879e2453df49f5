//! Database layer - connection pool, schema and stores
//!
//! # Design Principles
//!
//! - The pool is injected; stores borrow it and hold no other state
//! - Every filter and write binds its values ($1, $2, ...)
//! - Rely on DB constraints (NOT NULL, FK) - no check-then-insert
//! - One statement per save, atomic at the store level

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use error::{StoreError, StoreErrorKind};
pub use pool::create_pool;
pub use repos::*;
pub use sqlx::PgPool;
