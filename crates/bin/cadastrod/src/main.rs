//! # cadastrod: cadastro store daemon
//!
//! Composition root that wires the storage adapter into the application
//! services.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Open the `SQLite` connection pool and create the schema
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Report what the store holds
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cadastro_adapter_storage_sqlite_sqlx::{
    SqliteCargoRepository, SqliteFuncaoRepository, SqliteFuncionarioRepository,
    SqliteUsuarioRepository, SqliteUsuarioSistemaRepository,
};
use cadastro_app::services::cargo_service::CargoService;
use cadastro_app::services::funcao_service::FuncaoService;
use cadastro_app::services::funcionario_service::FuncionarioService;
use cadastro_app::services::usuario_service::UsuarioService;
use cadastro_app::services::usuario_sistema_service::UsuarioSistemaService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = config
        .storage()
        .build()
        .await
        .with_context(|| format!("opening database {}", config.database.url))?;
    let pool = db.pool().clone();
    tracing::info!(
        url = %config.database.url,
        max_connections = config.database.max_connections,
        "database ready"
    );

    // Services
    let funcionarios = FuncionarioService::new(SqliteFuncionarioRepository::new(pool.clone()));
    let funcoes = FuncaoService::new(SqliteFuncaoRepository::new(pool.clone()));
    let cargos = CargoService::new(SqliteCargoRepository::new(pool.clone()));
    let usuarios_sistema =
        UsuarioSistemaService::new(SqliteUsuarioSistemaRepository::new(pool.clone()));
    let usuarios = UsuarioService::new(SqliteUsuarioRepository::new(pool));

    let funcionarios = funcionarios.count_funcionarios().await?;
    let funcoes = funcoes.count_funcoes().await?;
    let cargos = cargos.count_cargos().await?;
    let usuarios_sistema = usuarios_sistema.count_usuarios_sistema().await?;
    let usuarios = usuarios.count_usuarios().await?;
    tracing::info!(
        funcionarios,
        funcoes,
        cargos,
        usuarios_sistema,
        usuarios,
        "cadastro store summary"
    );

    Ok(())
}
