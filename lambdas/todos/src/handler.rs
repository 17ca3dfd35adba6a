use lambda_http::{http::Method, Body, Request, RequestExt, Response};
use model::todo::ToDo;
use repository::ToDoRepository;
use response::{ApiError, ErrorKind};
use tracing::{error, info, warn};

/// What a successful request hands back to the response builder.
#[derive(Debug)]
enum Reply {
    Item(ToDo),
    Items(Vec<ToDo>),
    Empty,
}

/// Routes API Gateway requests for the ToDo resource onto a repository.
pub struct ToDoHandler<R> {
    repository: R,
}

impl<R> ToDoHandler<R>
where
    R: ToDoRepository,
{
    pub fn new(repository: R) -> ToDoHandler<R> {
        ToDoHandler { repository }
    }

    pub async fn handle(&self, request: &Request) -> Response<Body> {
        let method = request.method();
        let id = path_id(request);
        info!(%method, id = ?id, "handling ToDo request");

        match self.route(method, id, request.body()).await {
            Ok(Reply::Item(todo)) => response::ok(todo),
            Ok(Reply::Items(todos)) => response::ok(todos),
            Ok(Reply::Empty) => response::empty(),
            Err(err) => {
                match err.kind() {
                    ErrorKind::Internal => error!(%method, id = ?id, error = %err, "request failed"),
                    _ => warn!(%method, id = ?id, error = %err, "request rejected"),
                }
                response::error(&err)
            }
        }
    }

    async fn route(&self, method: &Method, id: Option<&str>, body: &[u8]) -> Result<Reply, ApiError> {
        match *method {
            Method::GET => match id {
                Some(id) => self.get(id).await.map(Reply::Item),
                None => self.get_all().await.map(Reply::Items),
            },
            Method::POST => self.create(body).await.map(Reply::Item),
            Method::PUT => self.update(id, body).await.map(Reply::Item),
            Method::DELETE => self.delete(id).await.map(|()| Reply::Empty),
            _ => Err(ApiError::method_not_allowed(format!("{method} not allowed"))),
        }
    }

    async fn get(&self, id: &str) -> Result<ToDo, ApiError> {
        self.existing(id).await
    }

    async fn get_all(&self) -> Result<Vec<ToDo>, ApiError> {
        self.repository.get_all().await.map_err(ApiError::internal)
    }

    async fn create(&self, body: &[u8]) -> Result<ToDo, ApiError> {
        let mut todo = parse_todo(body)?;

        // a new ToDo gets its ID from the store
        if !todo.id.is_empty() {
            return Err(ApiError::bad_request("ID is required"));
        }

        self.repository
            .save(&mut todo)
            .await
            .map_err(ApiError::internal)?;
        Ok(todo)
    }

    async fn update(&self, id: Option<&str>, body: &[u8]) -> Result<ToDo, ApiError> {
        let id = id.ok_or_else(|| ApiError::bad_request("ID is required"))?;
        self.existing(id).await?;

        let mut todo = parse_todo(body)?;
        if todo.id != id {
            return Err(ApiError::bad_request("ID in body does not match ID in path"));
        }

        self.repository
            .save(&mut todo)
            .await
            .map_err(ApiError::internal)?;
        Ok(todo)
    }

    async fn delete(&self, id: Option<&str>) -> Result<(), ApiError> {
        let id = id.ok_or_else(|| ApiError::bad_request("ID is required"))?;
        self.existing(id).await?;

        self.repository.delete(id).await.map_err(ApiError::internal)
    }

    async fn existing(&self, id: &str) -> Result<ToDo, ApiError> {
        self.repository
            .get(id)
            .await
            .map_err(ApiError::internal)?
            .ok_or_else(|| ApiError::not_found(format!("ToDo {id}")))
    }
}

fn path_id(request: &Request) -> Option<&str> {
    request
        .path_parameters_ref()
        .and_then(|params| params.first("id"))
        .filter(|id| !id.is_empty())
}

// Unparseable bodies are reported as internal errors, not bad requests.
fn parse_todo(body: &[u8]) -> Result<ToDo, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::internal)
}
