//! # cadastro-domain
//!
//! Pure domain model for the cadastro HR registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Funcionarios** (employees)
//! - Define **Funcoes** (job functions, 1:1 with a cargo)
//! - Define **Cargos** (positions linking an optional funcionario to exactly one funcao)
//! - Define **Usuarios do sistema** (login accounts, 1:1 with a funcionario)
//! - Define **Usuarios** (self-registered accounts with an optional address)
//! - Enforce required-field invariants on every draft before it reaches storage
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod cargo;
pub mod funcao;
pub mod funcionario;
pub mod usuario;
pub mod usuario_sistema;

mod field;
