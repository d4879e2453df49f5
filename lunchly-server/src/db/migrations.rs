//! Database migrations for the customers and reservations tables
//!
//! Every statement is idempotent, so `run` is safe on each startup.

use sqlx::PgPool;

use super::StoreError;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), StoreError> {
    tracing::info!("Running lunchly migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id SERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            phone TEXT,
            notes TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id SERIAL PRIMARY KEY,
            customer_id INTEGER NOT NULL REFERENCES customers(id),
            num_guests INTEGER NOT NULL,
            start_at TIMESTAMP NOT NULL,
            notes TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_reservations_customer_id ON reservations(customer_id)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Lunchly migrations complete");
    Ok(())
}
