//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod cargo_service;
pub mod funcao_service;
pub mod funcionario_service;
pub mod usuario_service;
pub mod usuario_sistema_service;

#[cfg(test)]
mod fakes;

use std::fmt::Display;

use cadastro_domain::error::{CadastroError, NotFoundError};

/// Turn a repository's "no row affected" into [`CadastroError::NotFound`].
fn require_found(found: bool, entity: &'static str, id: impl Display) -> Result<(), CadastroError> {
    if found {
        Ok(())
    } else {
        Err(not_found(entity, id))
    }
}

fn not_found(entity: &'static str, id: impl Display) -> CadastroError {
    NotFoundError {
        entity,
        id: id.to_string(),
    }
    .into()
}
