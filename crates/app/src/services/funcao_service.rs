//! Funcao service: use-cases for managing job functions.

use cadastro_domain::error::CadastroError;
use cadastro_domain::funcao::{Funcao, NewFuncao};
use cadastro_domain::id::FuncaoId;

use super::{not_found, require_found};
use crate::ports::FuncaoRepository;

/// Application service for funcao CRUD operations.
pub struct FuncaoService<R> {
    repo: R,
}

impl<R: FuncaoRepository> FuncaoService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new funcao and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if the name is blank, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, funcao), fields(nome = %funcao.nome_funcao))]
    pub async fn insert_funcao(&self, funcao: NewFuncao) -> Result<FuncaoId, CadastroError> {
        let funcao = funcao.validated()?;
        let created = self.repo.create(funcao).await?;
        tracing::info!(id = %created.id, "funcao created");
        Ok(created.id)
    }

    /// Look up a funcao by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] when no funcao with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_funcao(&self, id: FuncaoId) -> Result<Funcao, CadastroError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("Funcao", id))
    }

    /// List all funcoes ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_funcoes(&self) -> Result<Vec<Funcao>, CadastroError> {
        self.repo.get_all().await
    }

    /// Rename an existing funcao.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if the name is blank,
    /// [`CadastroError::NotFound`] if the id is unknown, or a storage error.
    #[tracing::instrument(skip(self, funcao), fields(id = %funcao.id))]
    pub async fn update_funcao(&self, funcao: Funcao) -> Result<(), CadastroError> {
        let funcao = funcao.validated()?;
        let id = funcao.id;
        require_found(self.repo.update(funcao).await?, "Funcao", id)
    }

    /// Delete a funcao and the cargo built on it.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] if the id is unknown, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_funcao(&self, id: FuncaoId) -> Result<(), CadastroError> {
        require_found(self.repo.delete(id).await?, "Funcao", id)
    }

    /// Number of stored funcoes.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_funcoes(&self) -> Result<u64, CadastroError> {
        self.repo.count().await
    }
}
