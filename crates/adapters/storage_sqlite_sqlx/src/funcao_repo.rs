//! `SQLite` implementation of [`FuncaoRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use cadastro_app::ports::FuncaoRepository;
use cadastro_domain::error::CadastroError;
use cadastro_domain::funcao::{Funcao, NewFuncao};
use cadastro_domain::id::FuncaoId;

use crate::error::StorageError;
use crate::row::to_count;

/// Wrapper for converting database rows into domain [`Funcao`].
struct Wrapper(Funcao);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Funcao> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let nome_funcao: String = row.try_get("nome_funcao")?;

        Ok(Self(Funcao {
            id: FuncaoId::new(id),
            nome_funcao,
        }))
    }
}

const INSERT: &str = "INSERT INTO funcao (nome_funcao) VALUES (?)";
const SELECT_BY_ID: &str = "SELECT * FROM funcao WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM funcao ORDER BY nome_funcao, id";
const UPDATE: &str = "UPDATE funcao SET nome_funcao = ? WHERE id = ?";
const DELETE_CARGO: &str = "DELETE FROM cargo WHERE funcao_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM funcao WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM funcao";

/// `SQLite`-backed funcao repository.
pub struct SqliteFuncaoRepository {
    pool: SqlitePool,
}

impl SqliteFuncaoRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FuncaoRepository for SqliteFuncaoRepository {
    fn create(
        &self,
        funcao: NewFuncao,
    ) -> impl Future<Output = Result<Funcao, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&funcao.nome_funcao)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Funcao::from_new(
                FuncaoId::new(result.last_insert_rowid()),
                funcao,
            ))
        }
    }

    fn get_by_id(
        &self,
        id: FuncaoId,
    ) -> impl Future<Output = Result<Option<Funcao>, CadastroError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Funcao>, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, funcao: Funcao) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&funcao.nome_funcao)
                .bind(funcao.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(&self, id: FuncaoId) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let cargos = sqlx::query(DELETE_CARGO)
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

            tracing::debug!(%id, cargos, "funcao cargo removed");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqliteCargoRepository;
    use crate::testing::{memory_pool, refuse_deletes, seed_funcionario};
    use cadastro_app::ports::CargoRepository;
    use cadastro_domain::cargo::Cargo;

    fn dev() -> NewFuncao {
        Funcao::builder().nome_funcao("Dev").build().unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_funcao_when_valid() {
        let repo = SqliteFuncaoRepository::new(memory_pool().await);
        let created = repo.create(dev()).await.unwrap();

        assert_eq!(created.id, FuncaoId::new(1));
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.nome_funcao, "Dev");
    }

    #[tokio::test]
    async fn should_allow_repeated_names() {
        let repo = SqliteFuncaoRepository::new(memory_pool().await);
        repo.create(dev()).await.unwrap();
        repo.create(dev()).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_list_funcoes_ordered_by_name() {
        let repo = SqliteFuncaoRepository::new(memory_pool().await);
        repo.create(Funcao::builder().nome_funcao("QA").build().unwrap())
            .await
            .unwrap();
        repo.create(dev()).await.unwrap();

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.nome_funcao)
            .collect();
        assert_eq!(names, vec!["Dev", "QA"]);
    }

    #[tokio::test]
    async fn should_update_funcao_when_exists() {
        let repo = SqliteFuncaoRepository::new(memory_pool().await);
        let mut funcao = repo.create(dev()).await.unwrap();

        funcao.nome_funcao = "Dev Senior".to_string();
        assert!(repo.update(funcao.clone()).await.unwrap());

        let fetched = repo.get_by_id(funcao.id).await.unwrap().unwrap();
        assert_eq!(fetched.nome_funcao, "Dev Senior");
    }

    #[tokio::test]
    async fn should_report_no_row_when_funcao_missing() {
        let repo = SqliteFuncaoRepository::new(memory_pool().await);
        let ghost = Funcao::from_new(FuncaoId::new(3), dev());

        assert!(!repo.update(ghost).await.unwrap());
        assert!(!repo.delete(FuncaoId::new(3)).await.unwrap());
        assert!(repo.get_by_id(FuncaoId::new(3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_delete_backing_cargo_when_funcao_deleted() {
        let pool = memory_pool().await;
        let funcoes = SqliteFuncaoRepository::new(pool.clone());
        let cargos = SqliteCargoRepository::new(pool.clone());

        let funcionario = seed_funcionario(&pool, "Ana", "ana@x.com").await;
        let funcao = funcoes.create(dev()).await.unwrap();
        let cargo = cargos
            .create(
                Cargo::builder()
                    .nome_cargo("Dev I")
                    .funcionario_id(funcionario)
                    .funcao_id(funcao.id)
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(funcoes.delete(funcao.id).await.unwrap());

        assert!(cargos.get_by_id(cargo.id).await.unwrap().is_none());
        assert_eq!(cargos.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_keep_backing_cargo_when_funcao_delete_fails() {
        let pool = memory_pool().await;
        let funcoes = SqliteFuncaoRepository::new(pool.clone());
        let cargos = SqliteCargoRepository::new(pool.clone());

        let funcao = funcoes.create(dev()).await.unwrap();
        let cargo = cargos
            .create(
                Cargo::builder()
                    .nome_cargo("Dev I")
                    .funcao_id(funcao.id)
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        refuse_deletes(&pool, "funcao").await;

        let result = funcoes.delete(funcao.id).await;
        assert!(matches!(result, Err(CadastroError::Storage(_))));

        let cargo = cargos.get_by_id(cargo.id).await.unwrap().unwrap();
        assert_eq!(cargo.funcao_id, funcao.id);
        assert_eq!(funcoes.count().await.unwrap(), 1);
    }
}
