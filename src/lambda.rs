use lambda_http::{run, service_fn, Error};
use people_api::adapters::dynamodb::{create_client, DynamoStore};
use people_api::utils::logger;
use people_api::{AppConfig, Router};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Starting people-api against table {} (cors: {})",
        config.table_name,
        config.cors_allow_origin.is_some()
    );

    // Built once per cold start and shared by every invocation.
    let client = create_client(&config).await;
    let store = DynamoStore::from_config(client, &config);
    let router = Router::new(store, &config);
    let router = &router;

    run(service_fn(move |event| async move {
        Ok::<_, Error>(router.handle(event).await)
    }))
    .await
}
