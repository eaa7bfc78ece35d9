//! Usuario service: registration and profile maintenance.

use cadastro_domain::error::CadastroError;
use cadastro_domain::id::UsuarioId;
use cadastro_domain::usuario::{NewUsuario, Usuario};

use super::{not_found, require_found};
use crate::ports::UsuarioRepository;

/// Application service for registered accounts.
pub struct UsuarioService<R> {
    repo: R,
}

impl<R: UsuarioRepository> UsuarioService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new account and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if required fields are blank,
    /// [`CadastroError::DuplicateKey`] if the email or matricula is taken, or
    /// a storage error.
    #[tracing::instrument(skip(self, usuario), fields(email = %usuario.email))]
    pub async fn register(&self, usuario: NewUsuario) -> Result<UsuarioId, CadastroError> {
        let usuario = usuario.validated()?;
        let created = self.repo.create(usuario).await?;
        tracing::info!(id = %created.id, "usuario registered");
        Ok(created.id)
    }

    /// Look up an account by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] when no account with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_usuario(&self, id: UsuarioId) -> Result<Usuario, CadastroError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("Usuario", id))
    }

    /// List all accounts ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_usuarios(&self) -> Result<Vec<Usuario>, CadastroError> {
        self.repo.get_all().await
    }

    /// Find the account with exactly this email.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, CadastroError> {
        self.repo.find_by_email(email).await
    }

    /// Exact email/senha match.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn authenticate(
        &self,
        email: &str,
        senha: &str,
    ) -> Result<Option<Usuario>, CadastroError> {
        self.repo.authenticate(email.trim(), senha).await
    }

    /// Replace the profile of an existing account. The password is kept.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if required fields are blank,
    /// [`CadastroError::NotFound`] if the id is unknown,
    /// [`CadastroError::DuplicateKey`] on an email or matricula collision, or
    /// a storage error.
    #[tracing::instrument(skip(self, usuario), fields(id = %usuario.id))]
    pub async fn update_usuario(&self, usuario: Usuario) -> Result<(), CadastroError> {
        let usuario = usuario.validated()?;
        let id = usuario.id;
        require_found(self.repo.update(usuario).await?, "Usuario", id)
    }

    /// Delete an account.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] if the id is unknown, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_usuario(&self, id: UsuarioId) -> Result<(), CadastroError> {
        require_found(self.repo.delete(id).await?, "Usuario", id)
    }

    /// Number of registered accounts.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_usuarios(&self) -> Result<u64, CadastroError> {
        self.repo.count().await
    }
}
