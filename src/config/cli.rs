use crate::config::AppConfig;
use crate::utils::error::ValidationError;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "people")]
#[command(about = "Read and edit the people table from a terminal")]
pub struct CliConfig {
    /// Table to operate on (overrides TABLE_NAME)
    #[arg(long)]
    pub table: Option<String>,

    /// DynamoDB endpoint, e.g. http://localhost:8000 for DynamoDB Local
    #[arg(long)]
    pub endpoint_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every person
    List,
    /// Show one person
    Get { id: String },
    /// Create a person and print it
    Create { name: String },
    /// Change a person's name
    Rename { id: String, name: String },
    /// Delete a person and print the removed record
    Delete { id: String },
}

impl CliConfig {
    /// Applies command-line overrides on top of an environment config.
    pub fn apply(&self, mut config: AppConfig) -> Result<AppConfig, ValidationError> {
        if let Some(table) = &self.table {
            config.table_name = table.clone();
        }
        if let Some(endpoint) = &self.endpoint_url {
            config.dynamodb_endpoint = Some(endpoint.clone());
        }
        config.validate()?;
        Ok(config)
    }
}
