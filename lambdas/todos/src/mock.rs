use std::sync::Mutex;

use async_trait::async_trait;
use model::todo::ToDo;
use repository::{RepositoryError, ToDoRepository};

type GetFn = Box<dyn Fn(&str) -> Result<Option<ToDo>, RepositoryError> + Send + Sync>;
type GetAllFn = Box<dyn Fn() -> Result<Vec<ToDo>, RepositoryError> + Send + Sync>;
type SaveFn = Box<dyn Fn(&mut ToDo) -> Result<(), RepositoryError> + Send + Sync>;
type DeleteFn = Box<dyn Fn(&str) -> Result<(), RepositoryError> + Send + Sync>;

/// Repository stand-in driven by closures. Records the arguments of every call;
/// calling an operation without a closure panics.
#[derive(Default)]
pub struct RepoMock {
    get_fn: Option<GetFn>,
    get_all_fn: Option<GetAllFn>,
    save_fn: Option<SaveFn>,
    delete_fn: Option<DeleteFn>,
    get_calls: Mutex<Vec<String>>,
    get_all_calls: Mutex<usize>,
    save_calls: Mutex<Vec<ToDo>>,
    delete_calls: Mutex<Vec<String>>,
}

impl RepoMock {
    pub fn on_get<F>(mut self, f: F) -> RepoMock
    where
        F: Fn(&str) -> Result<Option<ToDo>, RepositoryError> + Send + Sync + 'static,
    {
        self.get_fn = Some(Box::new(f));
        self
    }

    pub fn on_get_all<F>(mut self, f: F) -> RepoMock
    where
        F: Fn() -> Result<Vec<ToDo>, RepositoryError> + Send + Sync + 'static,
    {
        self.get_all_fn = Some(Box::new(f));
        self
    }

    pub fn on_save<F>(mut self, f: F) -> RepoMock
    where
        F: Fn(&mut ToDo) -> Result<(), RepositoryError> + Send + Sync + 'static,
    {
        self.save_fn = Some(Box::new(f));
        self
    }

    pub fn on_delete<F>(mut self, f: F) -> RepoMock
    where
        F: Fn(&str) -> Result<(), RepositoryError> + Send + Sync + 'static,
    {
        self.delete_fn = Some(Box::new(f));
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.get_calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }

    pub fn get_invoked(&self) -> bool {
        !self.get_calls.lock().unwrap().is_empty()
    }

    pub fn get_all_invoked(&self) -> bool {
        *self.get_all_calls.lock().unwrap() > 0
    }

    pub fn save_invoked(&self) -> bool {
        !self.save_calls.lock().unwrap().is_empty()
    }

    pub fn delete_invoked(&self) -> bool {
        !self.delete_calls.lock().unwrap().is_empty()
    }

    pub fn any_invoked(&self) -> bool {
        self.get_invoked() || self.get_all_invoked() || self.save_invoked() || self.delete_invoked()
    }
}

#[async_trait]
impl ToDoRepository for RepoMock {
    async fn get(&self, id: &str) -> Result<Option<ToDo>, RepositoryError> {
        self.get_calls.lock().unwrap().push(id.to_string());
        let f = self.get_fn.as_ref().expect("unexpected call to get");
        f(id)
    }

    async fn get_all(&self) -> Result<Vec<ToDo>, RepositoryError> {
        *self.get_all_calls.lock().unwrap() += 1;
        let f = self.get_all_fn.as_ref().expect("unexpected call to get_all");
        f()
    }

    async fn save(&self, todo: &mut ToDo) -> Result<(), RepositoryError> {
        self.save_calls.lock().unwrap().push(todo.clone());
        let f = self.save_fn.as_ref().expect("unexpected call to save");
        f(todo)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.delete_calls.lock().unwrap().push(id.to_string());
        let f = self.delete_fn.as_ref().expect("unexpected call to delete");
        f(id)
    }
}
