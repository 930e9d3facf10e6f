#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::ValidationError;
use crate::utils::validation::{
    validate_charset, validate_non_empty_string, validate_range, validate_url, Validate,
};
use std::env;

pub const DEFAULT_TABLE_NAME: &str = "People";

/// Runtime configuration shared by the Lambda and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub table_name: String,
    /// When set, responses carry CORS headers and OPTIONS is answered.
    pub cors_allow_origin: Option<String>,
    pub dynamodb_endpoint: Option<String>,
    pub region: Option<String>,
    pub scan_page_size: Option<i32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            cors_allow_origin: None,
            dynamodb_endpoint: None,
            region: None,
            scan_page_size: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds and validates a config from any key lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let scan_page_size = match get("SCAN_PAGE_SIZE") {
            Some(raw) => Some(raw.trim().parse::<i32>().map_err(|e| {
                ValidationError::InvalidValue {
                    field: "SCAN_PAGE_SIZE".to_string(),
                    value: raw.clone(),
                    reason: format!("Not a number: {}", e),
                }
            })?),
            None => None,
        };

        let config = Self {
            table_name: get("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            cors_allow_origin: get("CORS_ALLOW_ORIGIN"),
            dynamodb_endpoint: get("DYNAMODB_ENDPOINT"),
            region: get("AWS_REGION"),
            scan_page_size,
        };

        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_table_name("table_name", &self.table_name)?;

        if let Some(origin) = &self.cors_allow_origin {
            if origin != "*" {
                validate_url("cors_allow_origin", origin)?;
            }
        }

        if let Some(endpoint) = &self.dynamodb_endpoint {
            validate_url("dynamodb_endpoint", endpoint)?;
        }

        if let Some(region) = &self.region {
            validate_charset(
                "region",
                region,
                |c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-',
                "lowercase letters, numbers, and hyphens",
            )?;
        }

        if let Some(page_size) = self.scan_page_size {
            validate_range("scan_page_size", page_size, 1, 1000)?;
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

fn validate_table_name(field_name: &str, table_name: &str) -> Result<(), ValidationError> {
    validate_non_empty_string(field_name, table_name)?;
    validate_range(field_name, table_name.len(), 3, 255)?;
    validate_charset(
        field_name,
        table_name,
        |c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'),
        "letters, numbers, underscores, hyphens, and dots",
    )
}
