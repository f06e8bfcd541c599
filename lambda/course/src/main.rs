use lambda_http::{run, service_fn, tracing, Error};
mod config;
mod course;
mod error;
mod http_handler;
mod request;
mod storage;
use config::Config;
use http_handler::function_handler;
use storage::dynamodb::DynamoDbCourseStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = DynamoDbCourseStore::new(client, config.table_name);
    tracing::info!(table = store.table_name(), "course store ready");

    run(service_fn(|event| {
        function_handler(&store, event)
    })).await
}
