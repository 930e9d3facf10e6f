use clap::Parser;
use people_api::adapters::dynamodb::{create_client, DynamoStore};
use people_api::core::commands;
use people_api::utils::error::ErrorCategory;
use people_api::utils::logger;
use people_api::{AppConfig, ApiError, CliConfig, Envelope};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match AppConfig::from_env().and_then(|config| cli.apply(config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            return Ok(ExitCode::from(1));
        }
    };

    let client = create_client(&config).await;
    let store = DynamoStore::from_config(client, &config);

    match commands::execute(&store, &cli.command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let envelope = Envelope::<()>::failure(e.user_message());
            println!("{}", serde_json::to_string_pretty(&envelope)?);

            match (&e, e.category()) {
                (ApiError::NotFound(_), _) => Ok(ExitCode::from(2)),
                (_, ErrorCategory::Client) => {
                    eprintln!("❌ {}", e);
                    Ok(ExitCode::from(2))
                }
                (_, ErrorCategory::Server) => {
                    tracing::error!("❌ Command failed: {:?}", e);
                    eprintln!("❌ {}", e);
                    Ok(ExitCode::from(1))
                }
            }
        }
    }
}
