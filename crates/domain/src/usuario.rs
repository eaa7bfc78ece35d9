//! Usuario: a self-registered account with an optional postal address.

use serde::{Deserialize, Serialize};

use crate::error::{CadastroError, ValidationError};
use crate::field;
use crate::id::UsuarioId;
use crate::time::Date;

/// Brazilian postal address attached to a [`Usuario`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endereco {
    pub cep: String,
    pub logradouro: String,
    pub numero: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

/// A persisted registration account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: UsuarioId,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub data_nascimento: Date,
    pub matricula: Option<String>,
    pub endereco: Option<Endereco>,
}

impl Usuario {
    /// Create a builder for a new account.
    #[must_use]
    pub fn builder() -> UsuarioBuilder {
        UsuarioBuilder::default()
    }

    #[must_use]
    pub fn from_new(id: UsuarioId, new: NewUsuario) -> Self {
        Self {
            id,
            nome: new.nome,
            email: new.email,
            senha: new.senha,
            data_nascimento: new.data_nascimento,
            matricula: new.matricula,
            endereco: new.endereco,
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
        self.matricula = field::optional_text(self.matricula);
        Ok(self)
    }
}

/// A validated account that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUsuario {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub data_nascimento: Date,
    pub matricula: Option<String>,
    pub endereco: Option<Endereco>,
}

impl NewUsuario {
    /// Trim text fields and check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] when `nome`, `email` or `senha`
    /// is blank.
    pub fn validated(mut self) -> Result<Self, CadastroError> {
        self.nome = field::trimmed("nome", self.nome)?;
        self.email = field::trimmed("email", self.email)?;
        field::check_text("senha", &self.senha)?;
        self.matricula = field::optional_text(self.matricula);
        Ok(self)
    }
}

/// Step-by-step builder for [`NewUsuario`].
#[derive(Debug, Default)]
pub struct UsuarioBuilder {
    nome: Option<String>,
    email: Option<String>,
    senha: Option<String>,
    data_nascimento: Option<Date>,
    matricula: Option<String>,
    endereco: Option<Endereco>,
}

impl UsuarioBuilder {
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
    pub fn senha(mut self, senha: impl Into<String>) -> Self {
        self.senha = Some(senha.into());
        self
    }

    #[must_use]
    pub fn data_nascimento(mut self, data_nascimento: Date) -> Self {
        self.data_nascimento = Some(data_nascimento);
        self
    }

    #[must_use]
    pub fn matricula(mut self, matricula: impl Into<String>) -> Self {
        self.matricula = Some(matricula.into());
        self
    }

    #[must_use]
    pub fn endereco(mut self, endereco: Endereco) -> Self {
        self.endereco = Some(endereco);
        self
    }

    /// Consume the builder and validate. A blank `matricula` is stored as
    /// absent so it never collides with other blank values.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if `nome`, `email` or `senha` is
    /// blank, or `data_nascimento` was never set.
    pub fn build(self) -> Result<NewUsuario, CadastroError> {
        let senha = self.senha.unwrap_or_default();
        field::check_text("senha", &senha)?;
        Ok(NewUsuario {
            nome: field::required_text("nome", self.nome)?,
            email: field::required_text("email", self.email)?,
            senha,
            data_nascimento: self
                .data_nascimento
                .ok_or(ValidationError::MissingField("data_nascimento"))?,
            matricula: field::optional_text(self.matricula),
            endereco: self.endereco,
        })
    }
}
