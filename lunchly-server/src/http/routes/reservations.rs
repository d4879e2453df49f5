//! Reservation endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::post,
    Form, Router,
};

use crate::db::repos::ReservationStore;
use crate::http::error::ApiError;
use crate::http::forms::ReservationForm;
use crate::http::server::AppState;

/// POST /{id}/add-reservation - book a table for customer `id`
///
/// An unknown customer is left to the foreign key and surfaces as a 500.
async fn add_reservation(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<i32>,
    Form(form): Form<ReservationForm>,
) -> Result<Redirect, ApiError> {
    let mut reservation = form.into_reservation(customer_id)?;
    ReservationStore::new(&state.pool).save(&mut reservation).await?;

    Ok(Redirect::to(&format!("/{customer_id}")))
}

/// Reservation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/{id}/add-reservation", post(add_reservation))
}
