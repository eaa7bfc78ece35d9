//! Cargo service: use-cases for managing positions.

use cadastro_domain::cargo::{Cargo, CargoDetailed, NewCargo};
use cadastro_domain::error::CadastroError;
use cadastro_domain::id::CargoId;

use super::{not_found, require_found};
use crate::ports::CargoRepository;

/// Application service for cargo CRUD operations.
pub struct CargoService<R> {
    repo: R,
}

impl<R: CargoRepository> CargoService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new cargo and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if the name is blank,
    /// [`CadastroError::UniqueConstraint`] if the funcao already backs a
    /// cargo, [`CadastroError::MissingReference`] if the funcao or
    /// funcionario does not exist, or a storage error.
    #[tracing::instrument(
        skip(self, cargo),
        fields(nome = %cargo.nome_cargo, funcao_id = %cargo.funcao_id)
    )]
    pub async fn insert_cargo(&self, cargo: NewCargo) -> Result<CargoId, CadastroError> {
        let cargo = cargo.validated()?;
        let created = self.repo.create(cargo).await?;
        tracing::info!(id = %created.id, "cargo created");
        Ok(created.id)
    }

    /// Look up a cargo by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] when no cargo with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_cargo(&self, id: CargoId) -> Result<Cargo, CadastroError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("Cargo", id))
    }

    /// List all cargos ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cargos(&self) -> Result<Vec<Cargo>, CadastroError> {
        self.repo.get_all().await
    }

    /// List all cargos with the names of their funcionario and funcao.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cargos_with_names(&self) -> Result<Vec<CargoDetailed>, CadastroError> {
        self.repo.get_all_detailed().await
    }

    /// Replace name, funcionario and funcao of an existing cargo.
    ///
    /// # Errors
    ///
    /// Same as [`insert_cargo`](Self::insert_cargo), plus
    /// [`CadastroError::NotFound`] if the id is unknown.
    #[tracing::instrument(skip(self, cargo), fields(id = %cargo.id))]
    pub async fn update_cargo(&self, cargo: Cargo) -> Result<(), CadastroError> {
        let cargo = cargo.validated()?;
        let id = cargo.id;
        require_found(self.repo.update(cargo).await?, "Cargo", id)
    }

    /// Delete a cargo.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] if the id is unknown, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_cargo(&self, id: CargoId) -> Result<(), CadastroError> {
        require_found(self.repo.delete(id).await?, "Cargo", id)
    }

    /// Number of stored cargos.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_cargos(&self) -> Result<u64, CadastroError> {
        self.repo.count().await
    }
}
