//! Customer store
//!
//! Handles customer CRUD with these patterns:
//! - list: optional case-insensitive substring search on "first last"
//! - save: INSERT ... RETURNING id when unsaved, UPDATE otherwise
//! - top: inner JOIN with reservations, so customers without any never show up

use sqlx::PgPool;

use super::ReservationStore;
use crate::db::StoreError;
use crate::models::{Customer, Reservation};

/// Default number of customers returned by [`CustomerStore::top_by_reservation_count`].
pub const DEFAULT_TOP_LIMIT: i64 = 10;

/// Customer store
pub struct CustomerStore<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All customers ordered by last name, then first name.
    ///
    /// A non-blank `search` keeps only customers whose `"first last"` contains
    /// it, ignoring case. No match is an empty list, not an error.
    pub async fn list_all(&self, search: Option<&str>) -> Result<Vec<Customer>, StoreError> {
        let term = search.filter(|s| !s.trim().is_empty());

        let customers = match term {
            Some(term) => {
                tracing::debug!(term, "searching customers");
                sqlx::query_as::<_, Customer>(
                    r#"
                    SELECT id, first_name, last_name, phone, notes
                    FROM customers
                    WHERE CONCAT(first_name, ' ', last_name) ILIKE $1 ESCAPE '\'
                    ORDER BY last_name, first_name
                    "#,
                )
                .bind(contains_pattern(term))
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Customer>(
                    r#"
                    SELECT id, first_name, last_name, phone, notes
                    FROM customers
                    ORDER BY last_name, first_name
                    "#,
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(customers)
    }

    /// Get a single customer by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Customer, StoreError> {
        sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StoreError::not_found("customer", id))
    }

    /// Customers with the most reservations, busiest first.
    ///
    /// Ties are broken by id so the order is stable between calls.
    pub async fn top_by_reservation_count(&self, limit: i64) -> Result<Vec<Customer>, StoreError> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.phone, c.notes
            FROM customers c
            JOIN reservations r ON r.customer_id = c.id
            GROUP BY c.id
            ORDER BY COUNT(r.id) DESC, c.id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(customers)
    }

    /// Insert or update `customer`.
    ///
    /// An unsaved customer is inserted and gets its `id` assigned; a saved
    /// one has every field written back to its row.
    pub async fn save(&self, customer: &mut Customer) -> Result<(), StoreError> {
        match customer.id {
            None => {
                let (id,): (i32,) = sqlx::query_as(
                    r#"
                    INSERT INTO customers (first_name, last_name, phone, notes)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&customer.first_name)
                .bind(&customer.last_name)
                .bind(customer.phone.as_deref())
                .bind(customer.notes.as_deref())
                .fetch_one(self.pool)
                .await?;

                customer.id = Some(id);
                tracing::info!(customer_id = id, "customer created");
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE customers
                    SET first_name = $1,
                        last_name = $2,
                        phone = $3,
                        notes = $4
                    WHERE id = $5
                    "#,
                )
                .bind(&customer.first_name)
                .bind(&customer.last_name)
                .bind(customer.phone.as_deref())
                .bind(customer.notes.as_deref())
                .bind(id)
                .execute(self.pool)
                .await?;

                if result.rows_affected() == 0 {
                    return Err(StoreError::not_found("customer", id));
                }
                tracing::info!(customer_id = id, "customer updated");
            }
        }

        Ok(())
    }

    /// Reservations belonging to `customer`, fetched fresh on every call.
    pub async fn reservations(&self, customer: &Customer) -> Result<Vec<Reservation>, StoreError> {
        match customer.id {
            Some(id) => ReservationStore::new(self.pool).list_for_customer(id).await,
            None => Ok(Vec::new()),
        }
    }
}

/// `%term%` with LIKE wildcards in `term` escaped, so the term only ever
/// matches itself.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
