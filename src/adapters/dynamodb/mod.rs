//! DynamoDB implementation of `PersonStore` on top of `aws-sdk-dynamodb`.

pub mod conversions;
mod error;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use crate::adapters::pagination::{collect_pages, Page};
use crate::config::AppConfig;
use crate::domain::model::Person;
use crate::domain::ports::PersonStore;
use crate::utils::error::StoreResult;

use conversions::{id_key, item_to_person, items_to_people, person_to_item, Item};
use conversions::{ID_ATTRIBUTE, NAME_ATTRIBUTE};
use error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};

/// Builds an SDK client from the default credential chain, applying the
/// region and endpoint overrides from `config`.
pub async fn create_client(config: &AppConfig) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.dynamodb_endpoint {
        tracing::info!("Using DynamoDB endpoint override: {}", endpoint);
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    Client::new(&sdk_config)
}

/// `PersonStore` backed by a single DynamoDB table keyed by the string `id`.
///
/// The client handle is cheap to clone and safe to share across invocations.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
    page_size: Option<i32>,
}

impl DynamoStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            page_size: None,
        }
    }

    pub fn from_config(client: Client, config: &AppConfig) -> Self {
        Self::new(client, config.table_name.clone()).with_page_size(config.scan_page_size)
    }

    /// Caps the number of items read per scan page.
    pub fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }
}

#[async_trait]
impl PersonStore for DynamoStore {
    async fn fetch(&self, id: &str) -> StoreResult<Option<Person>> {
        tracing::debug!("GetItem {} from {}", id, self.table_name);

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(id_key(id)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e.into_service_error()))?;

        output.item.as_ref().map(item_to_person).transpose()
    }

    async fn list(&self) -> StoreResult<Vec<Person>> {
        tracing::debug!("Scanning {}", self.table_name);

        collect_pages(|start_key: Option<Item>| {
            let request = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_limit(self.page_size)
                .set_exclusive_start_key(start_key);

            async move {
                let output = request
                    .send()
                    .await
                    .map_err(|e| map_scan_error(e.into_service_error()))?;

                let items = items_to_people(output.items())?;
                // An empty key means the scan is done, same as no key.
                let next = output.last_evaluated_key.filter(|key| !key.is_empty());

                Ok(Page { items, next })
            }
        })
        .await
    }

    async fn insert(&self, name: &str) -> StoreResult<Person> {
        let person = Person {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        };
        tracing::debug!("PutItem {} into {}", person.id, self.table_name);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(person_to_item(&person)))
            .condition_expression("attribute_not_exists(#id)")
            .expression_attribute_names("#id", ID_ATTRIBUTE)
            .send()
            .await
            .map_err(|e| map_put_item_error(e.into_service_error()))?;

        Ok(person)
    }

    async fn remove(&self, id: &str) -> StoreResult<Option<Person>> {
        tracing::debug!("DeleteItem {} from {}", id, self.table_name);

        let output = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(id_key(id)))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e.into_service_error()))?;

        output.attributes.as_ref().map(item_to_person).transpose()
    }

    async fn rename(&self, id: &str, name: &str) -> StoreResult<Option<Person>> {
        tracing::debug!("UpdateItem {} in {}", id, self.table_name);

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(id_key(id)))
            .update_expression("SET #name = :name")
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#name", NAME_ATTRIBUTE)
            .expression_attribute_names("#id", ID_ATTRIBUTE)
            .expression_attribute_values(":name", AttributeValue::S(name.to_string()))
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => output.attributes.as_ref().map(item_to_person).transpose(),
            Err(err) => match err.into_service_error() {
                UpdateItemError::ConditionalCheckFailedException(_) => {
                    tracing::debug!("UpdateItem condition failed, {} does not exist", id);
                    Ok(None)
                }
                err => Err(map_update_item_error(err)),
            },
        }
    }
}
