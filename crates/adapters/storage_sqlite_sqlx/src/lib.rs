//! # cadastro-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `cadastro-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle, with foreign keys enforced
//!   on every connection
//! - Create the schema idempotently
//! - Map between domain types and database rows
//! - Classify constraint violations into the domain's conflict errors
//!
//! ## Dependency rule
//! Depends on `cadastro-app` (for port traits) and `cadastro-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod cargo_repo;
mod error;
mod funcao_repo;
mod funcionario_repo;
mod pool;
mod row;
mod schema;
#[cfg(test)]
mod testing;
mod usuario_repo;
mod usuario_sistema_repo;

pub use cargo_repo::SqliteCargoRepository;
pub use error::StorageError;
pub use funcao_repo::SqliteFuncaoRepository;
pub use funcionario_repo::SqliteFuncionarioRepository;
pub use pool::{Config, Database};
pub use usuario_repo::SqliteUsuarioRepository;
pub use usuario_sistema_repo::SqliteUsuarioSistemaRepository;
