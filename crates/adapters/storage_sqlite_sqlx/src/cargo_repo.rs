//! `SQLite` implementation of [`CargoRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use cadastro_app::ports::CargoRepository;
use cadastro_domain::cargo::{Cargo, CargoDetailed, NOT_AVAILABLE, NewCargo};
use cadastro_domain::error::CadastroError;
use cadastro_domain::id::{CargoId, FuncaoId, FuncionarioId};

use crate::error::StorageError;
use crate::row::to_count;

/// Wrapper for converting database rows into domain [`Cargo`].
struct Wrapper(Cargo);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Cargo> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let nome_cargo: String = row.try_get("nome_cargo")?;
        let funcionario_id: Option<i64> = row.try_get("funcionario_id")?;
        let funcao_id: i64 = row.try_get("funcao_id")?;

        Ok(Self(Cargo {
            id: CargoId::new(id),
            nome_cargo,
            funcionario_id: funcionario_id.map(FuncionarioId::new),
            funcao_id: FuncaoId::new(funcao_id),
        }))
    }
}

/// Joined row; missing names fall back to [`NOT_AVAILABLE`].
struct DetailedWrapper(CargoDetailed);

impl<'r> FromRow<'r, SqliteRow> for DetailedWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let Wrapper(cargo) = Wrapper::from_row(row)?;
        let nome_funcionario: Option<String> = row.try_get("nome_funcionario")?;
        let nome_funcao: Option<String> = row.try_get("nome_funcao")?;

        Ok(Self(CargoDetailed {
            cargo,
            nome_funcionario: nome_funcionario.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            nome_funcao: nome_funcao.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }))
    }
}

const INSERT: &str = "INSERT INTO cargo (nome_cargo, funcionario_id, funcao_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM cargo WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM cargo ORDER BY nome_cargo, id";
const SELECT_ALL_DETAILED: &str = r"
SELECT c.id, c.nome_cargo, c.funcionario_id, c.funcao_id,
       f.nome AS nome_funcionario, fa.nome_funcao AS nome_funcao
FROM cargo c
LEFT JOIN funcionario f ON f.id = c.funcionario_id
LEFT JOIN funcao fa ON fa.id = c.funcao_id
ORDER BY c.nome_cargo, c.id
";
const UPDATE: &str =
    "UPDATE cargo SET nome_cargo = ?, funcionario_id = ?, funcao_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM cargo WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM cargo";

/// `SQLite`-backed cargo repository.
pub struct SqliteCargoRepository {
    pool: SqlitePool,
}

impl SqliteCargoRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CargoRepository for SqliteCargoRepository {
    fn create(&self, cargo: NewCargo) -> impl Future<Output = Result<Cargo, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&cargo.nome_cargo)
                .bind(cargo.funcionario_id.map(FuncionarioId::get))
                .bind(cargo.funcao_id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Cargo::from_new(CargoId::new(result.last_insert_rowid()), cargo))
        }
    }

    fn get_by_id(
        &self,
        id: CargoId,
    ) -> impl Future<Output = Result<Option<Cargo>, CadastroError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Cargo>, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_all_detailed(
        &self,
    ) -> impl Future<Output = Result<Vec<CargoDetailed>, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<DetailedWrapper> = sqlx::query_as(SELECT_ALL_DETAILED)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, cargo: Cargo) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&cargo.nome_cargo)
                .bind(cargo.funcionario_id.map(FuncionarioId::get))
                .bind(cargo.funcao_id.get())
                .bind(cargo.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(&self, id: CargoId) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
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
