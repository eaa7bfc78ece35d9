//! `SQLite` implementation of [`UsuarioSistemaRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use cadastro_app::ports::UsuarioSistemaRepository;
use cadastro_domain::error::CadastroError;
use cadastro_domain::id::{FuncionarioId, UsuarioSistemaId};
use cadastro_domain::time::now;
use cadastro_domain::usuario_sistema::{NewUsuarioSistema, UsuarioSistema, UsuarioSistemaDetailed};

use crate::error::StorageError;
use crate::row::{decode_timestamp, encode_timestamp, to_count};

/// Wrapper for converting database rows into domain [`UsuarioSistema`].
struct Wrapper(UsuarioSistema);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<UsuarioSistema> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let login: String = row.try_get("login")?;
        let senha: String = row.try_get("senha")?;
        let ativo: bool = row.try_get("ativo")?;
        let funcionario_id: i64 = row.try_get("funcionario_id")?;
        let data_criacao: String = row.try_get("data_criacao")?;
        let ultimo_acesso: Option<String> = row.try_get("ultimo_acesso")?;

        Ok(Self(UsuarioSistema {
            id: UsuarioSistemaId::new(id),
            login,
            senha,
            ativo,
            funcionario_id: FuncionarioId::new(funcionario_id),
            data_criacao: decode_timestamp(&data_criacao)?,
            ultimo_acesso: ultimo_acesso
                .as_deref()
                .map(decode_timestamp)
                .transpose()?,
        }))
    }
}

struct DetailedWrapper(UsuarioSistemaDetailed);

impl<'r> FromRow<'r, SqliteRow> for DetailedWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let Wrapper(usuario) = Wrapper::from_row(row)?;

        Ok(Self(UsuarioSistemaDetailed {
            usuario,
            nome_funcionario: row.try_get("nome_funcionario")?,
            email_funcionario: row.try_get("email_funcionario")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO usuario_sistema (login, senha, ativo, funcionario_id, data_criacao) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM usuario_sistema WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM usuario_sistema ORDER BY login, id";
const SELECT_ALL_DETAILED: &str = r"
SELECT u.*, f.nome AS nome_funcionario, f.email AS email_funcionario
FROM usuario_sistema u
INNER JOIN funcionario f ON f.id = u.funcionario_id
ORDER BY u.login, u.id
";
const SELECT_BY_LOGIN: &str = "SELECT * FROM usuario_sistema WHERE login = ?";
const SELECT_BY_CREDENTIALS: &str = "SELECT * FROM usuario_sistema WHERE login = ? AND senha = ?";
const UPDATE: &str =
    "UPDATE usuario_sistema SET login = ?, senha = ?, ativo = ?, funcionario_id = ? WHERE id = ?";
const TOUCH_LAST_ACCESS: &str = "UPDATE usuario_sistema SET ultimo_acesso = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM usuario_sistema WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM usuario_sistema";

/// `SQLite`-backed system account repository.
pub struct SqliteUsuarioSistemaRepository {
    pool: SqlitePool,
}

impl SqliteUsuarioSistemaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UsuarioSistemaRepository for SqliteUsuarioSistemaRepository {
    fn create(
        &self,
        usuario: NewUsuarioSistema,
    ) -> impl Future<Output = Result<UsuarioSistema, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let data_criacao = now();
            let result = sqlx::query(INSERT)
                .bind(&usuario.login)
                .bind(&usuario.senha)
                .bind(usuario.ativo)
                .bind(usuario.funcionario_id.get())
                .bind(encode_timestamp(data_criacao))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = UsuarioSistemaId::new(result.last_insert_rowid());
            Ok(UsuarioSistema::from_new(id, usuario, data_criacao))
        }
    }

    fn get_by_id(
        &self,
        id: UsuarioSistemaId,
    ) -> impl Future<Output = Result<Option<UsuarioSistema>, CadastroError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<UsuarioSistema>, CadastroError>> + Send {
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
    ) -> impl Future<Output = Result<Vec<UsuarioSistemaDetailed>, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<DetailedWrapper> = sqlx::query_as(SELECT_ALL_DETAILED)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_login(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Option<UsuarioSistema>, CadastroError>> + Send {
        let pool = self.pool.clone();
        let login = login.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_LOGIN)
                .bind(&login)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn authenticate(
        &self,
        login: &str,
        senha: &str,
    ) -> impl Future<Output = Result<Option<UsuarioSistema>, CadastroError>> + Send {
        let pool = self.pool.clone();
        let login = login.to_string();
        let senha = senha.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_CREDENTIALS)
                .bind(&login)
                .bind(&senha)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update(
        &self,
        usuario: UsuarioSistema,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&usuario.login)
                .bind(&usuario.senha)
                .bind(usuario.ativo)
                .bind(usuario.funcionario_id.get())
                .bind(usuario.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn touch_last_access(
        &self,
        id: UsuarioSistemaId,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(TOUCH_LAST_ACCESS)
                .bind(encode_timestamp(now()))
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(
        &self,
        id: UsuarioSistemaId,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send {
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
