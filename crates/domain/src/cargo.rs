//! Cargo: a position.
//!
//! Links an optional [`Funcionario`](crate::funcionario::Funcionario)
//! (many cargos per funcionario) to exactly one
//! [`Funcao`](crate::funcao::Funcao) (one cargo per funcao).

use serde::{Deserialize, Serialize};

use crate::error::{CadastroError, ValidationError};
use crate::field;
use crate::id::{CargoId, FuncaoId, FuncionarioId};

/// Placeholder shown by [`CargoDetailed`] when a referenced row is gone.
pub const NOT_AVAILABLE: &str = "N/A";

/// A persisted position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cargo {
    pub id: CargoId,
    pub nome_cargo: String,
    pub funcionario_id: Option<FuncionarioId>,
    pub funcao_id: FuncaoId,
}

impl Cargo {
    /// Create a builder for a new cargo.
    #[must_use]
    pub fn builder() -> CargoBuilder {
        CargoBuilder::default()
    }

    #[must_use]
    pub fn from_new(id: CargoId, new: NewCargo) -> Self {
        Self {
            id,
            nome_cargo: new.nome_cargo,
            funcionario_id: new.funcionario_id,
            funcao_id: new.funcao_id,
        }
    }

    /// Trim text fields and check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] when `nome_cargo` is blank.
    pub fn validated(mut self) -> Result<Self, CadastroError> {
        self.nome_cargo = field::trimmed("nome_cargo", self.nome_cargo)?;
        Ok(self)
    }
}

/// A validated cargo that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCargo {
    pub nome_cargo: String,
    pub funcionario_id: Option<FuncionarioId>,
    pub funcao_id: FuncaoId,
}

impl NewCargo {
    /// Trim text fields and check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] when `nome_cargo` is blank.
    pub fn validated(mut self) -> Result<Self, CadastroError> {
        self.nome_cargo = field::trimmed("nome_cargo", self.nome_cargo)?;
        Ok(self)
    }
}

/// A cargo joined with the names of the rows it references.
///
/// `nome_funcionario` and `nome_funcao` fall back to [`NOT_AVAILABLE`] when
/// the foreign row is absent (e.g. the funcionario was deleted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoDetailed {
    #[serde(flatten)]
    pub cargo: Cargo,
    pub nome_funcionario: String,
    pub nome_funcao: String,
}

/// Step-by-step builder for [`NewCargo`].
#[derive(Debug, Default)]
pub struct CargoBuilder {
    nome_cargo: Option<String>,
    funcionario_id: Option<FuncionarioId>,
    funcao_id: Option<FuncaoId>,
}

impl CargoBuilder {
    #[must_use]
    pub fn nome_cargo(mut self, nome_cargo: impl Into<String>) -> Self {
        self.nome_cargo = Some(nome_cargo.into());
        self
    }

    #[must_use]
    pub fn funcionario_id(mut self, funcionario_id: FuncionarioId) -> Self {
        self.funcionario_id = Some(funcionario_id);
        self
    }

    #[must_use]
    pub fn funcao_id(mut self, funcao_id: FuncaoId) -> Self {
        self.funcao_id = Some(funcao_id);
        self
    }

    /// Consume the builder and validate.
    ///
    /// # Errors
    ///
    /// Returns [`CadastroError::Validation`] if `nome_cargo` is blank or
    /// `funcao_id` was never set.
    pub fn build(self) -> Result<NewCargo, CadastroError> {
        Ok(NewCargo {
            nome_cargo: field::required_text("nome_cargo", self.nome_cargo)?,
            funcionario_id: self.funcionario_id,
            funcao_id: self
                .funcao_id
                .ok_or(ValidationError::MissingField("funcao_id"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_cargo_without_funcionario() {
        let new = Cargo::builder()
            .nome_cargo("Dev I")
            .funcao_id(FuncaoId::new(1))
            .build()
            .unwrap();
        assert!(new.funcionario_id.is_none());
        assert_eq!(new.funcao_id, FuncaoId::new(1));
    }

    #[test]
    fn should_return_validation_error_when_funcao_missing() {
        let result = Cargo::builder().nome_cargo("Dev I").build();
        assert!(matches!(
            result,
            Err(CadastroError::Validation(ValidationError::MissingField(
                "funcao_id"
            )))
        ));
    }

    #[test]
    fn should_flatten_cargo_fields_in_detailed_json() {
        let detailed = CargoDetailed {
            cargo: Cargo {
                id: CargoId::new(1),
                nome_cargo: "Dev I".to_string(),
                funcionario_id: None,
                funcao_id: FuncaoId::new(2),
            },
            nome_funcionario: NOT_AVAILABLE.to_string(),
            nome_funcao: "Dev".to_string(),
        };
        let json = serde_json::to_value(&detailed).unwrap();
        assert_eq!(json["nome_cargo"], "Dev I");
        assert!(json["funcionario_id"].is_null());
        assert_eq!(json["nome_funcionario"], "N/A");
    }
}
