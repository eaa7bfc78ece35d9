//! Shared fixtures for the repository tests.

use sqlx::SqlitePool;

use cadastro_domain::id::{FuncaoId, FuncionarioId};

use crate::pool::Config;

pub(crate) async fn memory_pool() -> SqlitePool {
    let db = Config::new("sqlite::memory:").build().await.unwrap();
    db.pool().clone()
}

pub(crate) async fn seed_funcao(pool: &SqlitePool, nome_funcao: &str) -> FuncaoId {
    let result = sqlx::query("INSERT INTO funcao (nome_funcao) VALUES (?)")
        .bind(nome_funcao)
        .execute(pool)
        .await
        .unwrap();
    FuncaoId::new(result.last_insert_rowid())
}

pub(crate) async fn seed_funcionario(pool: &SqlitePool, nome: &str, email: &str) -> FuncionarioId {
    let result = sqlx::query(
        "INSERT INTO funcionario (nome, email, data_nascimento) VALUES (?, ?, '1990-01-01')",
    )
    .bind(nome)
    .bind(email)
    .execute(pool)
    .await
    .unwrap();
    FuncionarioId::new(result.last_insert_rowid())
}

/// Make every delete from `table` abort, so the last step of a cascading
/// delete fails after its earlier steps ran.
pub(crate) async fn refuse_deletes(pool: &SqlitePool, table: &str) {
    let trigger = format!(
        "CREATE TRIGGER refuse_{table}_delete BEFORE DELETE ON {table} \
         BEGIN SELECT RAISE(ABORT, '{table} is locked'); END;"
    );
    sqlx::raw_sql(&trigger).execute(pool).await.unwrap();
}
