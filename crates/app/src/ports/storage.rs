//! Storage port: repository traits for persistence.
//!
//! Implementations own referential integrity: unique keys, one-to-one links
//! and the cascade / set-null rules on delete. `update`, `delete` and
//! `touch_last_access` report whether a row was affected instead of failing
//! on a missing id; the services turn `false` into a not-found error.

use std::future::Future;

use cadastro_domain::cargo::{Cargo, CargoDetailed, NewCargo};
use cadastro_domain::error::CadastroError;
use cadastro_domain::funcao::{Funcao, NewFuncao};
use cadastro_domain::funcionario::{Funcionario, NewFuncionario};
use cadastro_domain::id::{CargoId, FuncaoId, FuncionarioId, UsuarioId, UsuarioSistemaId};
use cadastro_domain::usuario::{NewUsuario, Usuario};
use cadastro_domain::usuario_sistema::{NewUsuarioSistema, UsuarioSistema, UsuarioSistemaDetailed};

/// Repository for [`Funcionario`]s.
pub trait FuncionarioRepository {
    /// Insert a new funcionario. Fails with a duplicate-key error on a
    /// reused email.
    fn create(
        &self,
        funcionario: NewFuncionario,
    ) -> impl Future<Output = Result<Funcionario, CadastroError>> + Send;

    /// Get a funcionario by id.
    fn get_by_id(
        &self,
        id: FuncionarioId,
    ) -> impl Future<Output = Result<Option<Funcionario>, CadastroError>> + Send;

    /// Get all funcionarios ordered by `nome`.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Funcionario>, CadastroError>> + Send;

    /// Overwrite the stored row with the same id.
    fn update(
        &self,
        funcionario: Funcionario,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Delete a funcionario, detaching its cargos and deleting its system
    /// account, all or nothing.
    fn delete(&self, id: FuncionarioId)
    -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Number of stored funcionarios.
    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send;
}

/// Repository for [`Funcao`]s.
pub trait FuncaoRepository {
    /// Insert a new funcao.
    fn create(&self, funcao: NewFuncao)
    -> impl Future<Output = Result<Funcao, CadastroError>> + Send;

    /// Get a funcao by id.
    fn get_by_id(
        &self,
        id: FuncaoId,
    ) -> impl Future<Output = Result<Option<Funcao>, CadastroError>> + Send;

    /// Get all funcoes ordered by `nome_funcao`.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Funcao>, CadastroError>> + Send;

    /// Overwrite the stored row with the same id.
    fn update(&self, funcao: Funcao) -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Delete a funcao together with the cargo that references it.
    fn delete(&self, id: FuncaoId) -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Number of stored funcoes.
    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send;
}

/// Repository for [`Cargo`]s.
pub trait CargoRepository {
    /// Insert a new cargo. Fails with a unique-constraint error when the
    /// funcao already backs another cargo.
    fn create(&self, cargo: NewCargo) -> impl Future<Output = Result<Cargo, CadastroError>> + Send;

    /// Get a cargo by id.
    fn get_by_id(
        &self,
        id: CargoId,
    ) -> impl Future<Output = Result<Option<Cargo>, CadastroError>> + Send;

    /// Get all cargos ordered by `nome_cargo`.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Cargo>, CadastroError>> + Send;

    /// Get all cargos joined with funcionario and funcao names, ordered by
    /// `nome_cargo`.
    fn get_all_detailed(
        &self,
    ) -> impl Future<Output = Result<Vec<CargoDetailed>, CadastroError>> + Send;

    /// Overwrite the stored row with the same id. The funcao uniqueness rule
    /// ignores the row being updated.
    fn update(&self, cargo: Cargo) -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Delete a cargo.
    fn delete(&self, id: CargoId) -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Number of stored cargos.
    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send;
}

/// Repository for [`UsuarioSistema`]s.
pub trait UsuarioSistemaRepository {
    /// Insert a new account stamped with the current time. Fails when the
    /// login is taken or the funcionario already has an account.
    fn create(
        &self,
        usuario: NewUsuarioSistema,
    ) -> impl Future<Output = Result<UsuarioSistema, CadastroError>> + Send;

    /// Get an account by id.
    fn get_by_id(
        &self,
        id: UsuarioSistemaId,
    ) -> impl Future<Output = Result<Option<UsuarioSistema>, CadastroError>> + Send;

    /// Get all accounts ordered by `login`.
    fn get_all(&self) -> impl Future<Output = Result<Vec<UsuarioSistema>, CadastroError>> + Send;

    /// Get all accounts joined with their funcionario, ordered by `login`.
    fn get_all_detailed(
        &self,
    ) -> impl Future<Output = Result<Vec<UsuarioSistemaDetailed>, CadastroError>> + Send;

    /// Find the account with exactly this login.
    fn find_by_login(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Option<UsuarioSistema>, CadastroError>> + Send;

    /// Find the account whose login and senha both match exactly.
    fn authenticate(
        &self,
        login: &str,
        senha: &str,
    ) -> impl Future<Output = Result<Option<UsuarioSistema>, CadastroError>> + Send;

    /// Overwrite login, senha, ativo and funcionario of the row with the same
    /// id. Timestamps are left untouched.
    fn update(
        &self,
        usuario: UsuarioSistema,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Set `ultimo_acesso` to the current time.
    fn touch_last_access(
        &self,
        id: UsuarioSistemaId,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Delete an account.
    fn delete(
        &self,
        id: UsuarioSistemaId,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Number of stored accounts.
    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send;
}

/// Repository for [`Usuario`]s.
pub trait UsuarioRepository {
    /// Insert a new account. Fails with a duplicate-key error on a reused
    /// email or matricula.
    fn create(
        &self,
        usuario: NewUsuario,
    ) -> impl Future<Output = Result<Usuario, CadastroError>> + Send;

    /// Get an account by id.
    fn get_by_id(
        &self,
        id: UsuarioId,
    ) -> impl Future<Output = Result<Option<Usuario>, CadastroError>> + Send;

    /// Get all accounts ordered by `nome`.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Usuario>, CadastroError>> + Send;

    /// Find the account with exactly this email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Usuario>, CadastroError>> + Send;

    /// Find the account whose email and senha both match exactly.
    fn authenticate(
        &self,
        email: &str,
        senha: &str,
    ) -> impl Future<Output = Result<Option<Usuario>, CadastroError>> + Send;

    /// Overwrite the profile of the row with the same id. `senha` is not
    /// changed.
    fn update(&self, usuario: Usuario) -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Delete an account.
    fn delete(&self, id: UsuarioId) -> impl Future<Output = Result<bool, CadastroError>> + Send;

    /// Number of registered accounts.
    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send;
}
