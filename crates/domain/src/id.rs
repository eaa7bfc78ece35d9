//! Typed identifier newtypes backed by the store's integer row ids.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row id.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Access the raw row id.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Funcionario`](crate::funcionario::Funcionario).
    FuncionarioId
);

define_id!(
    /// Unique identifier for a [`Funcao`](crate::funcao::Funcao).
    FuncaoId
);

define_id!(
    /// Unique identifier for a [`Cargo`](crate::cargo::Cargo).
    CargoId
);

define_id!(
    /// Unique identifier for a [`UsuarioSistema`](crate::usuario_sistema::UsuarioSistema).
    UsuarioSistemaId
);

define_id!(
    /// Unique identifier for a [`Usuario`](crate::usuario::Usuario).
    UsuarioId
);
