//! Funcao: a job function. Each funcao backs at most one cargo; deleting
//! it deletes that cargo.

use serde::{Deserialize, Serialize};

use crate::error::CadastroError;
use crate::field;
use crate::id::FuncaoId;

/// A persisted job function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Funcao {
    pub id: FuncaoId,
    pub nome_funcao: String,
}

impl Funcao {
    /// Create a builder for a new funcao.
    #[must_use]
    pub fn builder() -> FuncaoBuilder {
        FuncaoBuilder::default()
    }

    #[must_use]
    pub fn from_new(id: FuncaoId, new: NewFuncao) -> Self {
        Self {
            id,
            nome_funcao: new.nome_funcao,
        }
    }

    /// Trim text fields and check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] when `nome_funcao` is blank.
    pub fn validated(mut self) -> Result<Self, CadastroError> {
        self.nome_funcao = field::trimmed("nome_funcao", self.nome_funcao)?;
        Ok(self)
    }
}

/// A validated funcao that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFuncao {
    pub nome_funcao: String,
}

impl NewFuncao {
    /// Trim text fields and check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] when `nome_funcao` is blank.
    pub fn validated(mut self) -> Result<Self, CadastroError> {
        self.nome_funcao = field::trimmed("nome_funcao", self.nome_funcao)?;
        Ok(self)
    }
}

/// Step-by-step builder for [`NewFuncao`].
#[derive(Debug, Default)]
pub struct FuncaoBuilder {
    nome_funcao: Option<String>,
}

impl FuncaoBuilder {
    #[must_use]
    pub fn nome_funcao(mut self, nome_funcao: impl Into<String>) -> Self {
        self.nome_funcao = Some(nome_funcao.into());
        self
    }

    /// Consume the builder and validate.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if `nome_funcao` is blank.
    pub fn build(self) -> Result<NewFuncao, CadastroError> {
        Ok(NewFuncao {
            nome_funcao: field::required_text("nome_funcao", self.nome_funcao)?,
        })
    }
}
