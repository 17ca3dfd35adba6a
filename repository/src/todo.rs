use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client;
use model::todo::{key, ToDo};
use tracing::debug;

use crate::error::RepositoryError;

/// Storage seam for ToDos. A `get` that finds nothing is `Ok(None)`, not an error.
#[async_trait]
pub trait ToDoRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<ToDo>, RepositoryError>;

    async fn get_all(&self) -> Result<Vec<ToDo>, RepositoryError>;

    /// Creates or replaces the ToDo. A blank `id` is filled in before the write.
    async fn save(&self, todo: &mut ToDo) -> Result<(), RepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<T> ToDoRepository for &T
where
    T: ToDoRepository + ?Sized,
{
    async fn get(&self, id: &str) -> Result<Option<ToDo>, RepositoryError> {
        (**self).get(id).await
    }

    async fn get_all(&self) -> Result<Vec<ToDo>, RepositoryError> {
        (**self).get_all().await
    }

    async fn save(&self, todo: &mut ToDo) -> Result<(), RepositoryError> {
        (**self).save(todo).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        (**self).delete(id).await
    }
}

pub struct DynamoToDoRepository {
    client: Client,
    table_name: String,
}

impl DynamoToDoRepository {
    pub fn new(shared_config: &SdkConfig, table_name: impl Into<String>) -> DynamoToDoRepository {
        DynamoToDoRepository {
            client: Client::new(shared_config),
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ToDoRepository for DynamoToDoRepository {
    async fn get(&self, id: &str) -> Result<Option<ToDo>, RepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key(id)))
            .send()
            .await
            .map_err(|err| RepositoryError::Get {
                id: id.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        output
            .item()
            .map(ToDo::from_dynamo_item)
            .transpose()
            .map_err(|err| RepositoryError::Unmarshal(format!("{err:#}")))
    }

    async fn get_all(&self) -> Result<Vec<ToDo>, RepositoryError> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|err| RepositoryError::Scan(DisplayErrorContext(&err).to_string()))?;

        let todos = output
            .items()
            .iter()
            .map(ToDo::from_dynamo_item)
            .collect::<Result<Vec<ToDo>, _>>()
            .map_err(|err| RepositoryError::Unmarshal(format!("{err:#}")))?;

        debug!(count = todos.len(), table = %self.table_name, "scanned ToDos");
        Ok(todos)
    }

    async fn save(&self, todo: &mut ToDo) -> Result<(), RepositoryError> {
        todo.assign_id();

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo.to_dynamo_item()))
            .send()
            .await
            .map_err(|err| RepositoryError::Put(DisplayErrorContext(&err).to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key(id)))
            .send()
            .await
            .map_err(|err| RepositoryError::Delete {
                id: id.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(())
    }
}
