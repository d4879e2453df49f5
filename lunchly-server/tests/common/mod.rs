//! Shared setup for database-backed tests
//!
//! Tests share one database and run in parallel, so every row they create
//! carries a unique tag and assertions only look at tagged rows.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p lunchly-server -- --ignored

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use lunchly_server::db::{create_pool, migrations};
use lunchly_server::{Customer, CustomerStore, Reservation, ReservationStore};
use sqlx::PgPool;

pub async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    pool
}

/// Short random tag for names created by one test.
pub fn tag() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_owned()
}

pub fn start_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 9, 8)
        .unwrap()
        .and_hms_opt(12, 20, 7)
        .unwrap()
}

pub async fn insert_customer(pool: &PgPool, first: &str, last: &str) -> Customer {
    let mut customer = Customer::new(first, last)
        .with_phone("1")
        .with_notes(format!("notes for {first}"));
    CustomerStore::new(pool)
        .save(&mut customer)
        .await
        .expect("insert customer");
    customer
}

pub async fn insert_reservations(pool: &PgPool, customer: &Customer, count: usize) {
    let store = ReservationStore::new(pool);
    let customer_id = customer.id.expect("customer must be saved");
    for i in 0..count {
        let mut reservation =
            Reservation::new(customer_id, 2 + i as i32, start_at()).with_notes("test reservation");
        store.save(&mut reservation).await.expect("insert reservation");
    }
}

pub async fn count_customers_named(pool: &PgPool, first_name: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers WHERE first_name = $1")
        .bind(first_name)
        .fetch_one(pool)
        .await
        .expect("count query");
    count
}
