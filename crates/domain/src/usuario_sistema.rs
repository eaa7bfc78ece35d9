//! Usuario do sistema: a login account bound to exactly one funcionario.
//!
//! `senha` is an opaque secret compared verbatim by storage; hashing, if any,
//! happens before it reaches this type.

use serde::{Deserialize, Serialize};

use crate::error::{CadastroError, ValidationError};
use crate::field;
use crate::id::{FuncionarioId, UsuarioSistemaId};
use crate::time::Timestamp;

/// A persisted system account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioSistema {
    pub id: UsuarioSistemaId,
    pub login: String,
    pub senha: String,
    pub ativo: bool,
    pub funcionario_id: FuncionarioId,
    pub data_criacao: Timestamp,
    pub ultimo_acesso: Option<Timestamp>,
}

impl UsuarioSistema {
    /// Create a builder for a new account. Accounts start active.
    #[must_use]
    pub fn builder() -> UsuarioSistemaBuilder {
        UsuarioSistemaBuilder::default()
    }

    /// Attach the id and creation time assigned by storage to a draft.
    #[must_use]
    pub fn from_new(id: UsuarioSistemaId, new: NewUsuarioSistema, data_criacao: Timestamp) -> Self {
        Self {
            id,
            login: new.login,
            senha: new.senha,
            ativo: new.ativo,
            funcionario_id: new.funcionario_id,
            data_criacao,
            ultimo_acesso: None,
        }
    }

    /// Trim text fields and check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] when `login` or `senha` is blank.
    pub fn validated(mut self) -> Result<Self, CadastroError> {
        self.login = field::trimmed("login", self.login)?;
        field::check_text("senha", &self.senha)?;
        Ok(self)
    }
}

/// A validated account that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUsuarioSistema {
    pub login: String,
    pub senha: String,
    pub ativo: bool,
    pub funcionario_id: FuncionarioId,
}

impl NewUsuarioSistema {
    /// Trim text fields and check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] when `login` or `senha` is blank.
    pub fn validated(mut self) -> Result<Self, CadastroError> {
        self.login = field::trimmed("login", self.login)?;
        field::check_text("senha", &self.senha)?;
        Ok(self)
    }
}

/// An account joined with its funcionario's name and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioSistemaDetailed {
    #[serde(flatten)]
    pub usuario: UsuarioSistema,
    pub nome_funcionario: String,
    pub email_funcionario: String,
}

/// Step-by-step builder for [`NewUsuarioSistema`].
#[derive(Debug)]
pub struct UsuarioSistemaBuilder {
    login: Option<String>,
    senha: Option<String>,
    ativo: bool,
    funcionario_id: Option<FuncionarioId>,
}

impl Default for UsuarioSistemaBuilder {
    fn default() -> Self {
        Self {
            login: None,
            senha: None,
            ativo: true,
            funcionario_id: None,
        }
    }
}

impl UsuarioSistemaBuilder {
    #[must_use]
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    #[must_use]
    pub fn senha(mut self, senha: impl Into<String>) -> Self {
        self.senha = Some(senha.into());
        self
    }

    #[must_use]
    pub fn ativo(mut self, ativo: bool) -> Self {
        self.ativo = ativo;
        self
    }

    #[must_use]
    pub fn funcionario_id(mut self, funcionario_id: FuncionarioId) -> Self {
        self.funcionario_id = Some(funcionario_id);
        self
    }

    /// Consume the builder and validate. `login` is trimmed, `senha` is kept
    /// as given.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if `login` or `senha` is blank,
    /// or `funcionario_id` was never set.
    pub fn build(self) -> Result<NewUsuarioSistema, CadastroError> {
        let senha = self.senha.unwrap_or_default();
        field::check_text("senha", &senha)?;
        Ok(NewUsuarioSistema {
            login: field::required_text("login", self.login)?,
            senha,
            ativo: self.ativo,
            funcionario_id: self
                .funcionario_id
                .ok_or(ValidationError::MissingField("funcionario_id"))?,
        })
    }
}
