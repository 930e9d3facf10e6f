use aws_sdk_dynamodb::config::retry::RetryConfig;
use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::Client;
use httpmock::prelude::*;
use people_api::{DynamoStore, Person, PersonStore};
use serde_json::json;

const TARGET_HEADER: &str = "x-amz-target";
const AMZ_JSON: &str = "application/x-amz-json-1.0";

/// Client pointed at the mock server with static credentials and no retries,
/// so every SDK call is exactly one HTTP request.
fn client_for(server: &MockServer) -> Client {
    let config = aws_sdk_dynamodb::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("test", "test", None, None, "static"))
        .endpoint_url(server.base_url())
        .retry_config(RetryConfig::disabled())
        .build();
    Client::from_conf(config)
}

fn person_item(id: &str, name: &str) -> serde_json::Value {
    json!({"id": {"S": id}, "name": {"S": name}})
}

#[tokio::test]
async fn test_list_follows_continuation_tokens() {
    let server = MockServer::start_async().await;

    let first_page = server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.Scan")
                .json_body(json!({"TableName": "People"}));
            then.status(200).header("content-type", AMZ_JSON).body(
                json!({
                    "Items": [person_item("a", "Ada"), person_item("b", "Grace")],
                    "Count": 2,
                    "ScannedCount": 2,
                    "LastEvaluatedKey": {"id": {"S": "b"}}
                })
                .to_string(),
            );
        })
        .await;

    let second_page = server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.Scan")
                .json_body(json!({
                    "TableName": "People",
                    "ExclusiveStartKey": {"id": {"S": "b"}}
                }));
            then.status(200).header("content-type", AMZ_JSON).body(
                json!({
                    "Items": [person_item("c", "Barbara")],
                    "Count": 1,
                    "ScannedCount": 1
                })
                .to_string(),
            );
        })
        .await;

    let store = DynamoStore::new(client_for(&server), "People");
    let people = store.list().await.unwrap();

    first_page.assert_hits_async(1).await;
    second_page.assert_hits_async(1).await;
    let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Grace", "Barbara"]);
}

#[tokio::test]
async fn test_list_sends_page_size() {
    let server = MockServer::start_async().await;

    let scan = server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.Scan")
                .json_body(json!({"TableName": "People", "Limit": 25}));
            then.status(200)
                .header("content-type", AMZ_JSON)
                .body(json!({"Items": [], "Count": 0, "ScannedCount": 0}).to_string());
        })
        .await;

    let store = DynamoStore::new(client_for(&server), "People").with_page_size(Some(25));
    assert!(store.list().await.unwrap().is_empty());
    scan.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_list_fails_when_a_page_fails() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.Scan")
                .json_body(json!({"TableName": "People"}));
            then.status(200).header("content-type", AMZ_JSON).body(
                json!({
                    "Items": [person_item("a", "Ada")],
                    "LastEvaluatedKey": {"id": {"S": "a"}}
                })
                .to_string(),
            );
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.Scan")
                .body_contains("ExclusiveStartKey");
            then.status(500).header("content-type", AMZ_JSON).body(
                json!({
                    "__type": "com.amazonaws.dynamodb.v20120810#InternalServerError",
                    "message": "boom"
                })
                .to_string(),
            );
        })
        .await;

    let store = DynamoStore::new(client_for(&server), "People");
    assert!(store.list().await.is_err());
}

#[tokio::test]
async fn test_fetch_missing_item_is_none() {
    let server = MockServer::start_async().await;

    let get = server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.GetItem")
                .json_body(json!({"TableName": "People", "Key": {"id": {"S": "nope"}}}));
            then.status(200)
                .header("content-type", AMZ_JSON)
                .body("{}");
        })
        .await;

    let store = DynamoStore::new(client_for(&server), "People");
    assert_eq!(store.fetch("nope").await.unwrap(), None);
    get.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_remove_returns_old_attributes() {
    let server = MockServer::start_async().await;

    let delete = server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.DeleteItem")
                .body_contains("ALL_OLD");
            then.status(200)
                .header("content-type", AMZ_JSON)
                .body(json!({"Attributes": person_item("a", "Ada")}).to_string());
        })
        .await;

    let store = DynamoStore::new(client_for(&server), "People");
    assert_eq!(
        store.remove("a").await.unwrap(),
        Some(Person {
            id: "a".to_string(),
            name: "Ada".to_string()
        })
    );
    delete.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_rename_missing_item_is_none() {
    let server = MockServer::start_async().await;

    let update = server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.UpdateItem")
                .body_contains("attribute_exists(#id)");
            then.status(400).header("content-type", AMZ_JSON).body(
                json!({
                    "__type": "com.amazonaws.dynamodb.v20120810#ConditionalCheckFailedException",
                    "message": "The conditional request failed"
                })
                .to_string(),
            );
        })
        .await;

    let store = DynamoStore::new(client_for(&server), "People");
    assert_eq!(store.rename("nope", "Ada").await.unwrap(), None);
    update.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_rename_returns_new_attributes() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.UpdateItem")
                .body_contains("ALL_NEW");
            then.status(200)
                .header("content-type", AMZ_JSON)
                .body(json!({"Attributes": person_item("a", "Ada L.")}).to_string());
        })
        .await;

    let store = DynamoStore::new(client_for(&server), "People");
    let renamed = store.rename("a", "Ada L.").await.unwrap().unwrap();
    assert_eq!(renamed.name, "Ada L.");
}

#[tokio::test]
async fn test_insert_generates_id_and_writes_item() {
    let server = MockServer::start_async().await;

    let put = server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.PutItem")
                .body_contains(r#""name":{"S":"Ada"}"#);
            then.status(200).header("content-type", AMZ_JSON).body("{}");
        })
        .await;

    let store = DynamoStore::new(client_for(&server), "People");
    let person = store.insert("Ada").await.unwrap();

    assert_eq!(person.name, "Ada");
    assert!(uuid::Uuid::parse_str(&person.id).is_ok());
    put.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_unreadable_item_is_an_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .header(TARGET_HEADER, "DynamoDB_20120810.GetItem");
            then.status(200)
                .header("content-type", AMZ_JSON)
                .body(json!({"Item": {"id": {"S": "a"}}}).to_string());
        })
        .await;

    let store = DynamoStore::new(client_for(&server), "People");
    assert!(store.fetch("a").await.is_err());
}
