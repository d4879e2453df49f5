//! HTTP layer - server-rendered customer and reservation pages
//!
//! Axum server with:
//! - HTML pages for listing, searching, viewing, adding and editing customers
//! - Typed form decoding with explicit validation
//! - Error pages with status codes mapped from store errors
//! - Graceful shutdown

pub mod error;
pub mod forms;
pub mod render;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
