//! Funcionario: an employee.
//!
//! A funcionario may hold many [`Cargo`](crate::cargo::Cargo)s and at most one
//! [`UsuarioSistema`](crate::usuario_sistema::UsuarioSistema). Deleting it
//! detaches its cargos and removes its system account.

use serde::{Deserialize, Serialize};

use crate::error::{CadastroError, ValidationError};
use crate::field;
use crate::id::FuncionarioId;
use crate::time::Date;

/// A persisted employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Funcionario {
    pub id: FuncionarioId,
    pub nome: String,
    pub email: String,
    pub data_nascimento: Date,
}

impl Funcionario {
    /// Create a builder for a new, not yet persisted funcionario.
    #[must_use]
    pub fn builder() -> FuncionarioBuilder {
        FuncionarioBuilder::default()
    }

    /// Attach the id assigned by storage to a draft.
    #[must_use]
    pub fn from_new(id: FuncionarioId, new: NewFuncionario) -> Self {
        Self {
            id,
            nome: new.nome,
            email: new.email,
            data_nascimento: new.data_nascimento,
        }
    }

    /// Trim text fields and check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] when `nome` or `email` is blank.
    pub fn validated(mut self) -> Result<Self, CadastroError> {
        self.nome = field::trimmed("nome", self.nome)?;
        self.email = field::trimmed("email", self.email)?;
        Ok(self)
    }
}

/// A validated funcionario that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFuncionario {
    pub nome: String,
    pub email: String,
    pub data_nascimento: Date,
}

impl NewFuncionario {
    /// Trim text fields and check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] when `nome` or `email` is blank.
    pub fn validated(mut self) -> Result<Self, CadastroError> {
        self.nome = field::trimmed("nome", self.nome)?;
        self.email = field::trimmed("email", self.email)?;
        Ok(self)
    }
}

/// Step-by-step builder for [`NewFuncionario`].
#[derive(Debug, Default)]
pub struct FuncionarioBuilder {
    nome: Option<String>,
    email: Option<String>,
    data_nascimento: Option<Date>,
}

impl FuncionarioBuilder {
    #[must_use]
    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = Some(nome.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn data_nascimento(mut self, data_nascimento: Date) -> Self {
        self.data_nascimento = Some(data_nascimento);
        self
    }

    /// Consume the builder, trim text fields and validate.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if `nome` or `email` is blank, or
    /// if `data_nascimento` was never set.
    pub fn build(self) -> Result<NewFuncionario, CadastroError> {
        Ok(NewFuncionario {
            nome: field::required_text("nome", self.nome)?,
            email: field::required_text("email", self.email)?,
            data_nascimento: self
                .data_nascimento
                .ok_or(ValidationError::MissingField("data_nascimento"))?,
        })
    }
}
