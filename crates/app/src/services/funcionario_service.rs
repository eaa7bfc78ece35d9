//! Funcionario service: use-cases for managing employees.

use cadastro_domain::error::CadastroError;
use cadastro_domain::funcionario::{Funcionario, NewFuncionario};
use cadastro_domain::id::FuncionarioId;

use super::{not_found, require_found};
use crate::ports::FuncionarioRepository;

/// Application service for funcionario CRUD operations.
pub struct FuncionarioService<R> {
    repo: R,
}

impl<R: FuncionarioRepository> FuncionarioService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new funcionario and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if required fields are blank,
    /// [`CadastroError::DuplicateKey`] if the email is taken, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, funcionario), fields(email = %funcionario.email))]
    pub async fn insert_funcionario(
        &self,
        funcionario: NewFuncionario,
    ) -> Result<FuncionarioId, CadastroError> {
        let funcionario = funcionario.validated()?;
        let created = self.repo.create(funcionario).await?;
        tracing::info!(id = %created.id, "funcionario created");
        Ok(created.id)
    }

    /// Look up a funcionario by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] when no funcionario with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_funcionario(&self, id: FuncionarioId) -> Result<Funcionario, CadastroError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("Funcionario", id))
    }

    /// List all funcionarios ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_funcionarios(&self) -> Result<Vec<Funcionario>, CadastroError> {
        self.repo.get_all().await
    }

    /// Replace name, email and birth date of an existing funcionario.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if required fields are blank,
    /// [`CadastroError::NotFound`] if the id is unknown,
    /// [`CadastroError::DuplicateKey`] on an email collision, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, funcionario), fields(id = %funcionario.id))]
    pub async fn update_funcionario(&self, funcionario: Funcionario) -> Result<(), CadastroError> {
        let funcionario = funcionario.validated()?;
        let id = funcionario.id;
        require_found(self.repo.update(funcionario).await?, "Funcionario", id)
    }

    /// Delete a funcionario. Its cargos lose their funcionario and its system
    /// account is removed.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::NotFound`] if the id is unknown, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_funcionario(&self, id: FuncionarioId) -> Result<(), CadastroError> {
        require_found(self.repo.delete(id).await?, "Funcionario", id)
    }

    /// Number of stored funcionarios.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_funcionarios(&self) -> Result<u64, CadastroError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::InMemoryFuncionarioRepo;
    use cadastro_domain::error::ValidationError;
    use cadastro_domain::time::Date;

    fn make_service() -> FuncionarioService<InMemoryFuncionarioRepo> {
        FuncionarioService::new(InMemoryFuncionarioRepo::default())
    }

    fn ana() -> NewFuncionario {
        Funcionario::builder()
            .nome("Ana")
            .email("ana@x.com")
            .data_nascimento(Date::from_ymd_opt(1990, 1, 1).unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_insert_funcionario_when_valid() {
        let svc = make_service();

        let id = svc.insert_funcionario(ana()).await.unwrap();

        let fetched = svc.get_funcionario(id).await.unwrap();
        assert_eq!(fetched.nome, "Ana");
        assert_eq!(fetched.email, "ana@x.com");
    }

    #[tokio::test]
    async fn should_reject_insert_when_nome_is_blank() {
        let svc = make_service();
        let mut funcionario = ana();
        funcionario.nome = "  ".to_string();

        let result = svc.insert_funcionario(funcionario).await;
        assert!(matches!(
            result,
            Err(CadastroError::Validation(ValidationError::EmptyField("nome")))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_funcionario_missing() {
        let svc = make_service();
        let result = svc.get_funcionario(FuncionarioId::new(99)).await;
        assert!(matches!(result, Err(CadastroError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_update_funcionario() {
        let svc = make_service();
        let id = svc.insert_funcionario(ana()).await.unwrap();

        let mut funcionario = svc.get_funcionario(id).await.unwrap();
        funcionario.email = "ana.souza@x.com".to_string();
        svc.update_funcionario(funcionario).await.unwrap();

        let fetched = svc.get_funcionario(id).await.unwrap();
        assert_eq!(fetched.email, "ana.souza@x.com");
    }

    #[tokio::test]
    async fn should_trim_fields_when_draft_bypasses_builder() {
        let svc = make_service();
        let mut funcionario = ana();
        funcionario.nome = " Ana ".to_string();
        funcionario.email = "\tana@x.com ".to_string();

        let id = svc.insert_funcionario(funcionario).await.unwrap();

        let mut fetched = svc.get_funcionario(id).await.unwrap();
        assert_eq!(fetched.nome, "Ana");
        assert_eq!(fetched.email, "ana@x.com");

        fetched.email = " ana.souza@x.com  ".to_string();
        svc.update_funcionario(fetched).await.unwrap();
        assert_eq!(svc.get_funcionario(id).await.unwrap().email, "ana.souza@x.com");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_funcionario() {
        let svc = make_service();
        let funcionario = Funcionario::from_new(FuncionarioId::new(7), ana());

        let result = svc.update_funcionario(funcionario).await;
        assert!(matches!(result, Err(CadastroError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_funcionario() {
        let svc = make_service();
        let id = svc.insert_funcionario(ana()).await.unwrap();

        svc.delete_funcionario(id).await.unwrap();

        let result = svc.get_funcionario(id).await;
        assert!(matches!(result, Err(CadastroError::NotFound(_))));
        assert!(matches!(
            svc.delete_funcionario(id).await,
            Err(CadastroError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_list_and_count_funcionarios() {
        let svc = make_service();
        svc.insert_funcionario(ana()).await.unwrap();
        let mut bruno = ana();
        bruno.nome = "Bruno".to_string();
        bruno.email = "bruno@x.com".to_string();
        svc.insert_funcionario(bruno).await.unwrap();

        let all = svc.list_funcionarios().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(svc.count_funcionarios().await.unwrap(), 2);
    }
}
