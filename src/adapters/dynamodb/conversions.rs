//! Pure conversions between DynamoDB attribute maps and `Person`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::domain::model::Person;
use crate::utils::error::{StoreError, StoreResult};

pub const ID_ATTRIBUTE: &str = "id";
pub const NAME_ATTRIBUTE: &str = "name";

pub type Item = HashMap<String, AttributeValue>;

/// Primary key for the record with the given id.
pub fn id_key(id: &str) -> Item {
    HashMap::from([(ID_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()))])
}

pub fn person_to_item(person: &Person) -> Item {
    HashMap::from([
        (
            ID_ATTRIBUTE.to_string(),
            AttributeValue::S(person.id.clone()),
        ),
        (
            NAME_ATTRIBUTE.to_string(),
            AttributeValue::S(person.name.clone()),
        ),
    ])
}

pub fn item_to_person(item: &Item) -> StoreResult<Person> {
    Ok(Person {
        id: get_string(item, ID_ATTRIBUTE)?,
        name: get_string(item, NAME_ATTRIBUTE)?,
    })
}

pub fn items_to_people(items: &[Item]) -> StoreResult<Vec<Person>> {
    items.iter().map(item_to_person).collect()
}

fn get_string(item: &Item, key: &str) -> StoreResult<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidItem {
            message: format!("Missing or invalid field: {}", key),
        })
}
