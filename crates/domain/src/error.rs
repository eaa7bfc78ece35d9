//! Common error types used across the workspace.
//!
//! Every port and service returns [`CadastroError`]. Each variant wraps a
//! typed error so callers can branch on the failure without string matching.

use std::error::Error as StdError;

/// Boxed source error carried by the infrastructure variants.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Top-level error for every cadastro operation.
#[derive(Debug, thiserror::Error)]
pub enum CadastroError {
    /// A draft failed its required-field checks.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An id-based lookup or mutation targeted a row that does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A natural unique key (email, login, matricula) is already taken.
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),

    /// A one-to-one relationship key is already linked to another row.
    #[error(transparent)]
    UniqueConstraint(#[from] UniqueConstraintError),

    /// A foreign key points to a row that does not exist.
    #[error(transparent)]
    MissingReference(#[from] MissingReferenceError),

    /// Creating the schema failed. Fatal for the session.
    #[error("schema initialization failed")]
    Schema(#[source] BoxError),

    /// The underlying storage failed (connection, IO, decoding).
    #[error("storage error")]
    Storage(#[source] BoxError),
}

impl CadastroError {
    /// Whether the error is a unique-key or one-to-one violation.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateKey(_) | Self::UniqueConstraint(_))
    }
}

/// Required-field violations detected before touching storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is empty or only whitespace.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A required non-text field was never provided.
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Raised when a row identified by `id` is absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Raised when a natural unique key is reused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{table}.{column} is already in use")]
pub struct DuplicateKeyError {
    pub table: String,
    pub column: String,
}

/// Raised when a one-to-one relationship key is reused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{table}.{column} is already linked to another {table}")]
pub struct UniqueConstraintError {
    pub table: String,
    pub column: String,
}

/// Raised when a foreign key does not resolve. The engine does not report
/// which key failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("referenced row does not exist")]
pub struct MissingReferenceError;
