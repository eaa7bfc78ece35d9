//! In-memory port implementations used by the service tests.
//!
//! They keep rows in id order and mimic the "row affected" booleans of the
//! real adapter. Constraints and cascades are not modelled.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Mutex;

use cadastro_domain::cargo::{Cargo, CargoDetailed, NOT_AVAILABLE, NewCargo};
use cadastro_domain::error::CadastroError;
use cadastro_domain::funcao::{Funcao, NewFuncao};
use cadastro_domain::funcionario::{Funcionario, NewFuncionario};
use cadastro_domain::id::{CargoId, FuncaoId, FuncionarioId, UsuarioId, UsuarioSistemaId};
use cadastro_domain::time::now;
use cadastro_domain::usuario::{NewUsuario, Usuario};
use cadastro_domain::usuario_sistema::{NewUsuarioSistema, UsuarioSistema, UsuarioSistemaDetailed};

use crate::ports::{
    CargoRepository, FuncaoRepository, FuncionarioRepository, UsuarioRepository,
    UsuarioSistemaRepository,
};

struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert(&mut self, make: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = make(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn replace(&mut self, id: i64, row: T) -> bool {
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    fn values(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

#[derive(Default)]
pub(crate) struct InMemoryFuncionarioRepo {
    store: Mutex<Table<Funcionario>>,
}

impl FuncionarioRepository for InMemoryFuncionarioRepo {
    fn create(
        &self,
        funcionario: NewFuncionario,
    ) -> impl Future<Output = Result<Funcionario, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let row = store.insert(|id| Funcionario::from_new(id.into(), funcionario));
        async { Ok(row) }
    }

    fn get_by_id(
        &self,
        id: FuncionarioId,
    ) -> impl Future<Output = Result<Option<Funcionario>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.rows.get(&id.get()).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Funcionario>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let mut result = store.values();
        result.sort_by(|a, b| a.nome.cmp(&b.nome));
        async { Ok(result) }
    }

    fn update(
        &self,
        funcionario: Funcionario,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = store.replace(funcionario.id.get(), funcionario);
        async move { Ok(found) }
    }

    fn delete(
        &self,
        id: FuncionarioId,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = store.rows.remove(&id.get()).is_some();
        async move { Ok(found) }
    }

    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let count = store.rows.len() as u64;
        async move { Ok(count) }
    }
}

#[derive(Default)]
pub(crate) struct InMemoryFuncaoRepo {
    store: Mutex<Table<Funcao>>,
}

impl FuncaoRepository for InMemoryFuncaoRepo {
    fn create(&self, funcao: NewFuncao) -> impl Future<Output = Result<Funcao, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let row = store.insert(|id| Funcao::from_new(id.into(), funcao));
        async { Ok(row) }
    }

    fn get_by_id(
        &self,
        id: FuncaoId,
    ) -> impl Future<Output = Result<Option<Funcao>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.rows.get(&id.get()).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Funcao>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let mut result = store.values();
        result.sort_by(|a, b| a.nome_funcao.cmp(&b.nome_funcao));
        async { Ok(result) }
    }

    fn update(&self, funcao: Funcao) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = store.replace(funcao.id.get(), funcao);
        async move { Ok(found) }
    }

    fn delete(&self, id: FuncaoId) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = store.rows.remove(&id.get()).is_some();
        async move { Ok(found) }
    }

    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let count = store.rows.len() as u64;
        async move { Ok(count) }
    }
}

#[derive(Default)]
pub(crate) struct InMemoryCargoRepo {
    store: Mutex<Table<Cargo>>,
}

impl CargoRepository for InMemoryCargoRepo {
    fn create(&self, cargo: NewCargo) -> impl Future<Output = Result<Cargo, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let row = store.insert(|id| Cargo::from_new(id.into(), cargo));
        async { Ok(row) }
    }

    fn get_by_id(
        &self,
        id: CargoId,
    ) -> impl Future<Output = Result<Option<Cargo>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.rows.get(&id.get()).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Cargo>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let mut result = store.values();
        result.sort_by(|a, b| a.nome_cargo.cmp(&b.nome_cargo));
        async { Ok(result) }
    }

    fn get_all_detailed(
        &self,
    ) -> impl Future<Output = Result<Vec<CargoDetailed>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let mut cargos = store.values();
        cargos.sort_by(|a, b| a.nome_cargo.cmp(&b.nome_cargo));
        let result = cargos
            .into_iter()
            .map(|cargo| CargoDetailed {
                cargo,
                nome_funcionario: NOT_AVAILABLE.to_string(),
                nome_funcao: NOT_AVAILABLE.to_string(),
            })
            .collect();
        async { Ok(result) }
    }

    fn update(&self, cargo: Cargo) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = store.replace(cargo.id.get(), cargo);
        async move { Ok(found) }
    }

    fn delete(&self, id: CargoId) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = store.rows.remove(&id.get()).is_some();
        async move { Ok(found) }
    }

    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let count = store.rows.len() as u64;
        async move { Ok(count) }
    }
}

#[derive(Default)]
pub(crate) struct InMemoryUsuarioSistemaRepo {
    store: Mutex<Table<UsuarioSistema>>,
}

impl UsuarioSistemaRepository for InMemoryUsuarioSistemaRepo {
    fn create(
        &self,
        usuario: NewUsuarioSistema,
    ) -> impl Future<Output = Result<UsuarioSistema, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let row = store.insert(|id| UsuarioSistema::from_new(id.into(), usuario, now()));
        async { Ok(row) }
    }

    fn get_by_id(
        &self,
        id: UsuarioSistemaId,
    ) -> impl Future<Output = Result<Option<UsuarioSistema>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.rows.get(&id.get()).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<UsuarioSistema>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let mut result = store.values();
        result.sort_by(|a, b| a.login.cmp(&b.login));
        async { Ok(result) }
    }

    fn get_all_detailed(
        &self,
    ) -> impl Future<Output = Result<Vec<UsuarioSistemaDetailed>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let mut usuarios = store.values();
        usuarios.sort_by(|a, b| a.login.cmp(&b.login));
        let result = usuarios
            .into_iter()
            .map(|usuario| UsuarioSistemaDetailed {
                usuario,
                nome_funcionario: String::new(),
                email_funcionario: String::new(),
            })
            .collect();
        async { Ok(result) }
    }

    fn find_by_login(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Option<UsuarioSistema>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.rows.values().find(|u| u.login == login).cloned();
        async { Ok(result) }
    }

    fn authenticate(
        &self,
        login: &str,
        senha: &str,
    ) -> impl Future<Output = Result<Option<UsuarioSistema>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store
            .rows
            .values()
            .find(|u| u.login == login && u.senha == senha)
            .cloned();
        async { Ok(result) }
    }

    fn update(
        &self,
        usuario: UsuarioSistema,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = match store.rows.get_mut(&usuario.id.get()) {
            Some(row) => {
                row.login = usuario.login;
                row.senha = usuario.senha;
                row.ativo = usuario.ativo;
                row.funcionario_id = usuario.funcionario_id;
                true
            }
            None => false,
        };
        async move { Ok(found) }
    }

    fn touch_last_access(
        &self,
        id: UsuarioSistemaId,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = match store.rows.get_mut(&id.get()) {
            Some(row) => {
                row.ultimo_acesso = Some(now());
                true
            }
            None => false,
        };
        async move { Ok(found) }
    }

    fn delete(
        &self,
        id: UsuarioSistemaId,
    ) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = store.rows.remove(&id.get()).is_some();
        async move { Ok(found) }
    }

    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let count = store.rows.len() as u64;
        async move { Ok(count) }
    }
}

#[derive(Default)]
pub(crate) struct InMemoryUsuarioRepo {
    store: Mutex<Table<Usuario>>,
}

impl UsuarioRepository for InMemoryUsuarioRepo {
    fn create(
        &self,
        usuario: NewUsuario,
    ) -> impl Future<Output = Result<Usuario, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let row = store.insert(|id| Usuario::from_new(id.into(), usuario));
        async { Ok(row) }
    }

    fn get_by_id(
        &self,
        id: UsuarioId,
    ) -> impl Future<Output = Result<Option<Usuario>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.rows.get(&id.get()).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Usuario>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let mut result = store.values();
        result.sort_by(|a, b| a.nome.cmp(&b.nome));
        async { Ok(result) }
    }

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Usuario>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.rows.values().find(|u| u.email == email).cloned();
        async { Ok(result) }
    }

    fn authenticate(
        &self,
        email: &str,
        senha: &str,
    ) -> impl Future<Output = Result<Option<Usuario>, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store
            .rows
            .values()
            .find(|u| u.email == email && u.senha == senha)
            .cloned();
        async { Ok(result) }
    }

    fn update(&self, usuario: Usuario) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = match store.rows.get_mut(&usuario.id.get()) {
            Some(row) => {
                let senha = std::mem::take(&mut row.senha);
                *row = Usuario { senha, ..usuario };
                true
            }
            None => false,
        };
        async move { Ok(found) }
    }

    fn delete(&self, id: UsuarioId) -> impl Future<Output = Result<bool, CadastroError>> + Send {
        let mut store = self.store.lock().unwrap();
        let found = store.rows.remove(&id.get()).is_some();
        async move { Ok(found) }
    }

    fn count(&self) -> impl Future<Output = Result<u64, CadastroError>> + Send {
        let store = self.store.lock().unwrap();
        let count = store.rows.len() as u64;
        async move { Ok(count) }
    }
}
