//! Reservation store
//!
//! Reservations are only ever created and listed per customer.

use sqlx::PgPool;

use crate::db::StoreError;
use crate::models::Reservation;

/// Reservation store
pub struct ReservationStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All reservations for one customer, earliest first.
    pub async fn list_for_customer(&self, customer_id: i32) -> Result<Vec<Reservation>, StoreError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, customer_id, num_guests, start_at, notes
            FROM reservations
            WHERE customer_id = $1
            ORDER BY start_at, id
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reservations)
    }

    /// Insert `reservation` and assign its `id`.
    ///
    /// Always inserts, even when `id` is already set. An unknown
    /// `customer_id` fails with [`StoreError::ConstraintViolation`].
    pub async fn save(&self, reservation: &mut Reservation) -> Result<(), StoreError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO reservations (customer_id, num_guests, start_at, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(reservation.customer_id)
        .bind(reservation.num_guests)
        .bind(reservation.start_at)
        .bind(reservation.notes.as_deref())
        .fetch_one(self.pool)
        .await?;

        reservation.id = Some(id);
        tracing::info!(
            reservation_id = id,
            customer_id = reservation.customer_id,
            "reservation created"
        );
        Ok(())
    }
}
