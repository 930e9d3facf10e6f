use crate::config::cli::Command;
use crate::core::handlers::{self, Reply};
use crate::domain::model::{CreatePerson, Envelope, UpdatePerson};
use crate::domain::ports::PersonStore;
use crate::utils::error::{ApiError, Result};

/// Runs one CLI command through the same handlers the Lambda uses and
/// returns the rendered envelope.
pub async fn execute<S: PersonStore + ?Sized>(store: &S, command: &Command) -> Result<String> {
    tracing::debug!("Executing {:?}", command);

    let reply: Reply = match command {
        Command::List => handlers::list_people(store).await?,
        Command::Get { id } => handlers::get_person(store, id).await?,
        Command::Create { name } => {
            let input = CreatePerson {
                name: Some(name.clone()),
            };
            handlers::insert_person(store, input).await?
        }
        Command::Rename { id, name } => {
            let input = UpdatePerson {
                name: Some(name.clone()),
            };
            handlers::rename_person(store, id, input).await?
        }
        Command::Delete { id } => handlers::delete_person(store, Some(id.as_str())).await?,
    };

    serde_json::to_string_pretty(&Envelope::success(&reply.payload)).map_err(ApiError::Serialization)
}
