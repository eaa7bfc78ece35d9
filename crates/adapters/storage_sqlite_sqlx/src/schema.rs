//! DDL for the cadastro schema. Every statement is idempotent.
//!
//! - `cargo.funcionario_id` is nullable and set to null when its
//!   funcionario is deleted (1:N).
//! - `cargo.funcao_id` is unique and cascades on delete (1:1).
//! - `usuario_sistema.funcionario_id` is unique and cascades on delete (1:1).

pub(crate) const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS funcionario (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    nome            TEXT NOT NULL,
    email           TEXT NOT NULL UNIQUE,
    data_nascimento TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS funcao (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    nome_funcao TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS cargo (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    nome_cargo     TEXT NOT NULL,
    funcionario_id INTEGER REFERENCES funcionario (id) ON DELETE SET NULL,
    funcao_id      INTEGER NOT NULL UNIQUE REFERENCES funcao (id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_cargo_funcionario_id ON cargo (funcionario_id);

CREATE TABLE IF NOT EXISTS usuario_sistema (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    login          TEXT NOT NULL UNIQUE,
    senha          TEXT NOT NULL,
    ativo          INTEGER NOT NULL DEFAULT 1 CHECK (ativo IN (0, 1)),
    funcionario_id INTEGER NOT NULL UNIQUE REFERENCES funcionario (id) ON DELETE CASCADE,
    data_criacao   TEXT NOT NULL,
    ultimo_acesso  TEXT
);

CREATE TABLE IF NOT EXISTS usuario (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    nome            TEXT NOT NULL,
    email           TEXT NOT NULL UNIQUE,
    senha           TEXT NOT NULL,
    data_nascimento TEXT NOT NULL,
    matricula       TEXT UNIQUE,
    endereco        TEXT
);
";
