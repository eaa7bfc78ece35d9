//! Storage-specific error type wrapping sqlx errors.
//!
//! Constraint violations reported by the engine are the only source of
//! truth for uniqueness and references: no pre-query is made. They are
//! classified here into the domain's conflict errors.

use sqlx::error::{DatabaseError, ErrorKind};

use cadastro_domain::error::{
    CadastroError, DuplicateKeyError, MissingReferenceError, UniqueConstraintError,
};

/// `table.column` pairs whose UNIQUE index enforces a one-to-one link.
const ONE_TO_ONE_KEYS: &[(&str, &str)] = &[("cargo", "funcao_id"), ("usuario_sistema", "funcionario_id")];

const UNIQUE_PREFIX: &str = "UNIQUE constraint failed: ";

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to (de)serialize a stored JSON value.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),

    /// Creating the schema failed.
    #[error("schema initialization error")]
    Schema(#[source] sqlx::Error),
}

impl From<StorageError> for CadastroError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Database(sqlx::Error::Database(db)) => classify(db),
            err @ StorageError::Schema(_) => Self::Schema(Box::new(err)),
            other => Self::Storage(Box::new(other)),
        }
    }
}

fn classify(db: Box<dyn DatabaseError>) -> CadastroError {
    match db.kind() {
        ErrorKind::UniqueViolation => match violated_column(db.message()) {
            Some((table, column)) if is_one_to_one(&table, &column) => {
                UniqueConstraintError { table, column }.into()
            }
            Some((table, column)) => DuplicateKeyError { table, column }.into(),
            None => unclassified(db),
        },
        ErrorKind::ForeignKeyViolation => MissingReferenceError.into(),
        _ => unclassified(db),
    }
}

fn unclassified(db: Box<dyn DatabaseError>) -> CadastroError {
    CadastroError::Storage(Box::new(StorageError::Database(sqlx::Error::Database(db))))
}

fn is_one_to_one(table: &str, column: &str) -> bool {
    ONE_TO_ONE_KEYS
        .iter()
        .any(|(t, c)| *t == table && *c == column)
}

/// Extract the first `table.column` from `UNIQUE constraint failed: t.c[, t.c2]`.
fn violated_column(message: &str) -> Option<(String, String)> {
    let columns = message.strip_prefix(UNIQUE_PREFIX)?;
    let first = columns.split(',').next()?.trim();
    let (table, column) = first.split_once('.')?;
    Some((table.to_string(), column.to_string()))
}
