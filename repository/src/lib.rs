pub mod error;
pub mod memory;
pub mod todo;

pub use error::RepositoryError;
pub use memory::InMemoryToDoRepository;
pub use todo::{DynamoToDoRepository, ToDoRepository};
