//! Customer pages

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};

use crate::db::repos::{CustomerStore, DEFAULT_TOP_LIMIT};
use crate::http::error::ApiError;
use crate::http::forms::{CustomerForm, SearchParams};
use crate::http::render;
use crate::http::server::AppState;

/// GET / - list customers, optionally filtered by ?search=
async fn list_customers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, ApiError> {
    let search = params.search.as_deref();
    let customers = CustomerStore::new(&state.pool).list_all(search).await?;
    Ok(render::customer_list(&customers, search))
}

/// GET /top-ten - customers with the most reservations
async fn top_customers(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let customers = CustomerStore::new(&state.pool)
        .top_by_reservation_count(DEFAULT_TOP_LIMIT)
        .await?;
    Ok(render::top_customers(&customers))
}

/// GET /add - blank customer form
async fn add_customer_form() -> Html<String> {
    render::customer_form(None)
}

/// POST /add - create a customer, then show it
async fn add_customer(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CustomerForm>,
) -> Result<Redirect, ApiError> {
    let mut customer = form.into_customer()?;
    CustomerStore::new(&state.pool).save(&mut customer).await?;

    let id = customer.id.unwrap_or_default();
    Ok(Redirect::to(&format!("/{id}")))
}

/// GET /{id} - customer detail with reservations
async fn show_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, ApiError> {
    let store = CustomerStore::new(&state.pool);
    let customer = store.get_by_id(id).await?;
    let reservations = store.reservations(&customer).await?;
    Ok(render::customer_detail(&customer, &reservations))
}

/// GET /{id}/edit - prefilled customer form
async fn edit_customer_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, ApiError> {
    let customer = CustomerStore::new(&state.pool).get_by_id(id).await?;
    Ok(render::customer_form(Some(&customer)))
}

/// POST /{id}/edit - update a customer, then show it
async fn edit_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<CustomerForm>,
) -> Result<Redirect, ApiError> {
    let store = CustomerStore::new(&state.pool);
    let mut customer = store.get_by_id(id).await?;
    form.apply_to(&mut customer)?;
    store.save(&mut customer).await?;

    Ok(Redirect::to(&format!("/{id}")))
}

/// Customer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_customers))
        .route("/top-ten", get(top_customers))
        .route("/add", get(add_customer_form).post(add_customer))
        .route("/{id}", get(show_customer))
        .route("/{id}/edit", get(edit_customer_form).post(edit_customer))
}
