pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::dynamodb::DynamoStore;
pub use adapters::memory::InMemoryStore;
pub use config::AppConfig;
pub use crate::core::router::Router;
pub use domain::model::{CreatePerson, Envelope, Person, UpdatePerson};
pub use domain::ports::PersonStore;
pub use utils::error::{ApiError, Result, StoreError};
