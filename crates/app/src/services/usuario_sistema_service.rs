//! Usuario-sistema service: use-cases for system login accounts.

use cadastro_domain::error::CadastroError;
use cadastro_domain::id::UsuarioSistemaId;
use cadastro_domain::usuario_sistema::{NewUsuarioSistema, UsuarioSistema, UsuarioSistemaDetailed};

use super::{not_found, require_found};
use crate::ports::UsuarioSistemaRepository;

/// Application service for system account operations.
pub struct UsuarioSistemaService<R> {
    repo: R,
}

impl<R: UsuarioSistemaRepository> UsuarioSistemaService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new account and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if login or senha is blank,
    /// a conflict if the login is taken or the funcionario already has an
    /// account, [`CadastroError::MissingReference`] if the funcionario does
    /// not exist, or a storage error.
    #[tracing::instrument(
        skip(self, usuario),
        fields(login = %usuario.login, funcionario_id = %usuario.funcionario_id)
    )]
    pub async fn insert_usuario_sistema(
        &self,
        usuario: NewUsuarioSistema,
    ) -> Result<UsuarioSistemaId, CadastroError> {
        let usuario = usuario.validated()?;
        let created = self.repo.create(usuario).await?;
        tracing::info!(id = %created.id, "usuario do sistema created");
        Ok(created.id)
    }

    /// Look up an account by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] when no account with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_usuario_sistema(
        &self,
        id: UsuarioSistemaId,
    ) -> Result<UsuarioSistema, CadastroError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("UsuarioSistema", id))
    }

    /// List all accounts ordered by login.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_usuarios_sistema(&self) -> Result<Vec<UsuarioSistema>, CadastroError> {
        self.repo.get_all().await
    }

    /// List all accounts with their funcionario's name and email.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_usuarios_sistema_with_names(
        &self,
    ) -> Result<Vec<UsuarioSistemaDetailed>, CadastroError> {
        self.repo.get_all_detailed().await
    }

    /// Find the account with exactly this login.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_by_login(&self, login: &str) -> Result<Option<UsuarioSistema>, CadastroError> {
        self.repo.find_by_login(login).await
    }

    /// Exact login/senha match. Inactive accounts are returned as well.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn authenticate(
        &self,
        login: &str,
        senha: &str,
    ) -> Result<Option<UsuarioSistema>, CadastroError> {
        self.repo.authenticate(login, senha).await
    }

    /// Authenticate an active account and record the access time.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] when the credentials do not match
    /// or the account is inactive, or a storage error.
    #[tracing::instrument(skip(self, senha))]
    pub async fn login(&self, login: &str, senha: &str) -> Result<UsuarioSistema, CadastroError> {
        let Some(usuario) = self.repo.authenticate(login, senha).await? else {
            tracing::debug!("credentials rejected");
            return Err(not_found("UsuarioSistema", login));
        };
        if !usuario.ativo {
            tracing::debug!(id = %usuario.id, "inactive account");
            return Err(not_found("UsuarioSistema", login));
        }
        self.touch_last_access(usuario.id).await?;
        self.get_usuario_sistema(usuario.id).await
    }

    /// Replace login, senha, ativo and funcionario of an existing account.
    ///
    /// # Errors
    ///
    /// Same as [`insert_usuario_sistema`](Self::insert_usuario_sistema),
    /// plus [`CadastroError::NotFound`] if the id is unknown.
    #[tracing::instrument(skip(self, usuario), fields(id = %usuario.id))]
    pub async fn update_usuario_sistema(&self, usuario: UsuarioSistema) -> Result<(), CadastroError> {
        let usuario = usuario.validated()?;
        let id = usuario.id;
        require_found(self.repo.update(usuario).await?, "UsuarioSistema", id)
    }

    /// Set the account's last access to now.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] if the id is unknown, or a storage
    /// error from the repository.
    pub async fn touch_last_access(&self, id: UsuarioSistemaId) -> Result<(), CadastroError> {
        require_found(self.repo.touch_last_access(id).await?, "UsuarioSistema", id)
    }

    /// Delete an account.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] if the id is unknown, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_usuario_sistema(&self, id: UsuarioSistemaId) -> Result<(), CadastroError> {
        require_found(self.repo.delete(id).await?, "UsuarioSistema", id)
    }

    /// Number of stored accounts.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_usuarios_sistema(&self) -> Result<u64, CadastroError> {
        self.repo.count().await
    }
}
