//! # cadastro-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `FuncionarioRepository`: CRUD for funcionarios
//!   - `FuncaoRepository`: CRUD for funcoes
//!   - `CargoRepository`: CRUD for cargos plus the joined listing
//!   - `UsuarioSistemaRepository`: CRUD, lookup and credential check for system accounts
//!   - `UsuarioRepository`: CRUD, lookup and credential check for registered accounts
//! - Define **driving/inbound ports** as use-case structs:
//!   one service per entity, validating drafts and reporting absent rows as
//!   [`NotFound`](cadastro_domain::error::CadastroError::NotFound)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `cadastro-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
