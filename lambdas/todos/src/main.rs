mod config;
mod handler;
#[cfg(test)]
mod mock;

use config::{Config, Store};
use handler::ToDoHandler;
use lambda_http::{run, service_fn, Error, Request};
use repository::{DynamoToDoRepository, InMemoryToDoRepository, ToDoRepository};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .json()
        .with_max_level(config.log_level)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    match config.store {
        Store::DynamoDb => {
            let shared_config = aws_config::load_from_env().await;
            info!(table = %config.table_name, "serving ToDos from DynamoDB");
            serve(DynamoToDoRepository::new(&shared_config, config.table_name)).await
        }
        Store::Memory => {
            info!("serving ToDos from memory");
            serve(InMemoryToDoRepository::new()).await
        }
    }
}

async fn serve<R>(repository: R) -> Result<(), Error>
where
    R: ToDoRepository,
{
    let handler_ref = &ToDoHandler::new(repository);

    run(service_fn(move |event: Request| async move {
        Ok::<_, Error>(handler_ref.handle(&event).await)
    }))
    .await
}
