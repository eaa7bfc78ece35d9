//! `SQLite` implementation of [`FuncionarioRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use cadastro_app::ports::FuncionarioRepository;
use cadastro_domain::error::CadastroError;
use cadastro_domain::funcionario::{Funcionario, NewFuncionario};
use cadastro_domain::id::FuncionarioId;

use crate::error::StorageError;
use crate::row::{decode_date, encode_date, to_count};

/// Wrapper for converting database rows into domain [`Funcionario`].
struct Wrapper(Funcionario);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Funcionario> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let nome: String = row.try_get("nome")?;
        let email: String = row.try_get("email")?;
        let data_nascimento: String = row.try_get("data_nascimento")?;

        Ok(Self(Funcionario {
            id: FuncionarioId::new(id),
            nome,
            email,
            data_nascimento: decode_date(&data_nascimento)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO funcionario (nome, email, data_nascimento) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM funcionario WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM funcionario ORDER BY nome, id";
const UPDATE: &str = "UPDATE funcionario SET nome = ?, email = ?, data_nascimento = ? WHERE id = ?";
const DETACH_CARGOS: &str = "UPDATE cargo SET funcionario_id = NULL WHERE funcionario_id = ?";
const DELETE_USUARIO_SISTEMA: &str = "DELETE FROM usuario_sistema WHERE funcionario_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM funcionario WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM funcionario";

/// `SQLite`-backed funcionario repository.
pub struct SqliteFuncionarioRepository {
    pool: SqlitePool,
}

impl SqliteFuncionarioRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FuncionarioRepository for SqliteFuncionarioRepository {
    fn create(
        &self,
        funcionario: NewFuncionario,
    ) -> impl Future<Output = Result<Funcionario, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&funcionario.nome)
                .bind(&funcionario.email)
                .bind(encode_date(funcionario.data_nascimento))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = FuncionarioId::new(result.last_insert_rowid());
            Ok(Funcionario::from_new(id, funcionario))
        }
    }

    fn get_by_id(
        &self,
        id: FuncionarioId,
    ) -> impl Future<Output = Result<Option<Funcionario>, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Funcionario>, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        funcionario: Funcionario,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&funcionario.nome)
                .bind(&funcionario.email)
                .bind(encode_date(funcionario.data_nascimento))
                .bind(funcionario.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(
        &self,
        id: FuncionarioId,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let detached = sqlx::query(DETACH_CARGOS)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?
                .rows_affected();
            let accounts = sqlx::query(DELETE_USUARIO_SISTEMA)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?
                .rows_affected();
            let deleted = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?
                .rows_affected();

            tx.commit().await.map_err(StorageError::from)?;

            tracing::debug!(%id, detached, accounts, "funcionario dependents released");
            Ok(deleted > 0)
        }
    }

    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let count: i64 = sqlx::query_scalar(COUNT)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(to_count(count))
        }
    }
}
