use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("could not get ToDo {id} from database: {message}")]
    Get { id: String, message: String },

    #[error("could not scan ToDos from database: {0}")]
    Scan(String),

    #[error("could not put ToDo: {0}")]
    Put(String),

    #[error("could not delete ToDo {id}: {message}")]
    Delete { id: String, message: String },

    #[error("could not unmarshal ToDo: {0}")]
    Unmarshal(String),

    #[error("{0}")]
    Backend(String),
}
