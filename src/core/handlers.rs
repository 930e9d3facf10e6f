use crate::domain::model::{CreatePerson, Person, UpdatePerson};
use crate::domain::ports::PersonStore;
use crate::utils::error::{ApiError, Result};
use lambda_http::http::StatusCode;
use serde::de::{DeserializeOwned, Unexpected};
use serde::Serialize;
use serde_json::Value;

pub const RESOURCE_PATH: &str = "/people";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    One(Person),
    Many(Vec<Person>),
}

/// Successful handler outcome, before it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub payload: Payload,
    pub location: Option<String>,
}

impl Reply {
    pub fn ok(payload: Payload) -> Self {
        Self {
            status: StatusCode::OK,
            payload,
            location: None,
        }
    }

    pub fn created(person: Person) -> Self {
        Self {
            status: StatusCode::CREATED,
            location: Some(location_of(&person.id)),
            payload: Payload::One(person),
        }
    }

    fn with_location(mut self, id: &str) -> Self {
        self.location = Some(location_of(id));
        self
    }
}

pub fn location_of(id: &str) -> String {
    format!("{}/{}", RESOURCE_PATH, id)
}

fn malformed(e: serde_json::Error) -> ApiError {
    tracing::info!("Can't deserialize body: {}", e);
    ApiError::MalformedBody(e)
}

/// Input bodies must be JSON objects. `null` reads as an empty input, so the
/// missing name is reported by validation rather than as a malformed body.
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T> {
    match serde_json::from_slice(body).map_err(malformed)? {
        Value::Null => Ok(T::default()),
        object @ Value::Object(_) => serde_json::from_value(object).map_err(malformed),
        other => Err(malformed(serde::de::Error::invalid_type(
            unexpected(&other),
            &"a JSON object",
        ))),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Null => Unexpected::Unit,
        Value::Object(_) => Unexpected::Map,
    }
}

fn require_id(id: Option<&str>) -> Result<&str> {
    id.ok_or(ApiError::MissingPathParameter("id"))
}

pub async fn list_people<S: PersonStore + ?Sized>(store: &S) -> Result<Reply> {
    let people = store.list().await?;
    tracing::info!("Fetched {} people", people.len());
    Ok(Reply::ok(Payload::Many(people)))
}

pub async fn get_person<S: PersonStore + ?Sized>(store: &S, id: &str) -> Result<Reply> {
    let person = store
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
    tracing::info!("Fetched person {}", person.id);
    Ok(Reply::ok(Payload::One(person)))
}

pub async fn create_person<S: PersonStore + ?Sized>(store: &S, body: &[u8]) -> Result<Reply> {
    let input: CreatePerson = parse_body(body)?;
    insert_person(store, input).await
}

pub async fn insert_person<S: PersonStore + ?Sized>(
    store: &S,
    input: CreatePerson,
) -> Result<Reply> {
    let name = input.into_name()?;
    let person = store.insert(&name).await?;
    tracing::info!("Inserted person {}", person.id);
    Ok(Reply::created(person))
}

pub async fn update_person<S: PersonStore + ?Sized>(
    store: &S,
    id: Option<&str>,
    body: &[u8],
) -> Result<Reply> {
    let id = require_id(id)?;
    let input: UpdatePerson = parse_body(body)?;
    rename_person(store, id, input).await
}

pub async fn rename_person<S: PersonStore + ?Sized>(
    store: &S,
    id: &str,
    input: UpdatePerson,
) -> Result<Reply> {
    let name = input.into_name()?;
    let person = store
        .rename(id, &name)
        .await?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
    tracing::info!("Renamed person {}", person.id);
    let id = person.id.clone();
    Ok(Reply::ok(Payload::One(person)).with_location(&id))
}

pub async fn delete_person<S: PersonStore + ?Sized>(store: &S, id: Option<&str>) -> Result<Reply> {
    let id = require_id(id)?;
    let person = store
        .remove(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
    tracing::info!("Deleted person {}", person.id);
    Ok(Reply::ok(Payload::One(person)))
}
