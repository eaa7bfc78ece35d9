//! `SQLite` implementation of [`UsuarioRepository`].
//!
//! The address is kept as a JSON document in the `endereco` column.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use cadastro_app::ports::UsuarioRepository;
use cadastro_domain::error::CadastroError;
use cadastro_domain::id::UsuarioId;
use cadastro_domain::usuario::{Endereco, NewUsuario, Usuario};

use crate::error::StorageError;
use crate::row::{decode_date, decode_json, encode_date, encode_json, to_count};

/// Wrapper for converting database rows into domain [`Usuario`].
struct Wrapper(Usuario);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Usuario> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let nome: String = row.try_get("nome")?;
        let email: String = row.try_get("email")?;
        let senha: String = row.try_get("senha")?;
        let data_nascimento: String = row.try_get("data_nascimento")?;
        let matricula: Option<String> = row.try_get("matricula")?;
        let endereco: Option<String> = row.try_get("endereco")?;

        Ok(Self(Usuario {
            id: UsuarioId::new(id),
            nome,
            email,
            senha,
            data_nascimento: decode_date(&data_nascimento)?,
            matricula,
            endereco: endereco
                .as_deref()
                .map(decode_json::<Endereco>)
                .transpose()?,
        }))
    }
}

fn encode_endereco(endereco: Option<&Endereco>) -> Result<Option<String>, StorageError> {
    endereco
        .map(encode_json)
        .transpose()
        .map_err(StorageError::from)
}

const INSERT: &str = "INSERT INTO usuario (nome, email, senha, data_nascimento, matricula, endereco) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM usuario WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM usuario ORDER BY nome, id";
const SELECT_BY_EMAIL: &str = "SELECT * FROM usuario WHERE email = ?";
const SELECT_BY_CREDENTIALS: &str = "SELECT * FROM usuario WHERE email = ? AND senha = ?";
const UPDATE: &str = "UPDATE usuario SET nome = ?, email = ?, data_nascimento = ?, matricula = ?, endereco = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM usuario WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM usuario";

/// `SQLite`-backed registration account repository.
pub struct SqliteUsuarioRepository {
    pool: SqlitePool,
}

impl SqliteUsuarioRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UsuarioRepository for SqliteUsuarioRepository {
    fn create(
        &self,
        usuario: NewUsuario,
    ) -> impl Future<Output = Result<Usuario, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let endereco = encode_endereco(usuario.endereco.as_ref())?;
            let result = sqlx::query(INSERT)
                .bind(&usuario.nome)
                .bind(&usuario.email)
                .bind(&usuario.senha)
                .bind(encode_date(usuario.data_nascimento))
                .bind(usuario.matricula.as_deref())
                .bind(endereco)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Usuario::from_new(
                UsuarioId::new(result.last_insert_rowid()),
                usuario,
            ))
        }
    }

    fn get_by_id(
        &self,
        id: UsuarioId,
    ) -> impl Future<Output = Result<Option<Usuario>, CadastroError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Usuario>, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Usuario>, CadastroError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(&email)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn authenticate(
        &self,
        email: &str,
        senha: &str,
    ) -> impl Future<Output = Result<Option<Usuario>, CadastroError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_string();
        let senha = senha.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_CREDENTIALS)
                .bind(&email)
                .bind(&senha)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update(&self, usuario: Usuario) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let endereco = encode_endereco(usuario.endereco.as_ref())?;
            let result = sqlx::query(UPDATE)
                .bind(&usuario.nome)
                .bind(&usuario.email)
                .bind(encode_date(usuario.data_nascimento))
                .bind(usuario.matricula.as_deref())
                .bind(endereco)
                .bind(usuario.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(&self, id: UsuarioId) -> impl Future<Output = Result<bool, CadastroError>> + Send {
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
