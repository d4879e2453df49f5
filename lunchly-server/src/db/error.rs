//! Store error type
//!
//! Errors are tagged by kind so callers can react without knowing about
//! sqlx; the HTTP layer maps kinds to status codes.

use sqlx::error::ErrorKind;

/// Machine-readable failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    NotFound,
    ConstraintViolation,
    ConnectionFailure,
    Database,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No such {resource}: {id}")]
    NotFound { resource: &'static str, id: String },

    /// The database rejected a write (NOT NULL, foreign key, unique, check).
    #[error("constraint violation: {0}")]
    ConstraintViolation(#[source] sqlx::Error),

    #[error("connection failure: {0}")]
    ConnectionFailure(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::NotFound { .. } => StoreErrorKind::NotFound,
            Self::ConstraintViolation(_) => StoreErrorKind::ConstraintViolation,
            Self::ConnectionFailure(_) => StoreErrorKind::ConnectionFailure,
            Self::Database(_) => StoreErrorKind::Database,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if is_constraint_violation(&e) {
            Self::ConstraintViolation(e)
        } else if is_connection_failure(&e) {
            Self::ConnectionFailure(e)
        } else {
            Self::Database(e)
        }
    }
}

fn is_constraint_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => matches!(
            db_err.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        ),
        _ => false,
    }
}

fn is_connection_failure(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}
