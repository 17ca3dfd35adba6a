use std::collections::HashMap;

use async_trait::async_trait;
use model::todo::ToDo;
use tokio::sync::RwLock;

use crate::error::RepositoryError;
use crate::todo::ToDoRepository;

/// Keeps ToDos in process memory. Contents are lost with the process.
#[derive(Default)]
pub struct InMemoryToDoRepository {
    items: RwLock<HashMap<String, ToDo>>,
}

impl InMemoryToDoRepository {
    pub fn new() -> InMemoryToDoRepository {
        InMemoryToDoRepository::default()
    }

    pub fn with_items(todos: impl IntoIterator<Item = ToDo>) -> InMemoryToDoRepository {
        let items = todos
            .into_iter()
            .map(|todo| (todo.id.clone(), todo))
            .collect();
        InMemoryToDoRepository {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl ToDoRepository for InMemoryToDoRepository {
    async fn get(&self, id: &str) -> Result<Option<ToDo>, RepositoryError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<ToDo>, RepositoryError> {
        let mut todos: Vec<ToDo> = self.items.read().await.values().cloned().collect();
        todos.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(todos)
    }

    async fn save(&self, todo: &mut ToDo) -> Result<(), RepositoryError> {
        todo.assign_id();
        self.items
            .write()
            .await
            .insert(todo.id.clone(), todo.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.items.write().await.remove(id);
        Ok(())
    }
}
