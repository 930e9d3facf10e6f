use crate::adapters::pagination::{collect_pages, Page};
use crate::domain::model::Person;
use crate::domain::ports::PersonStore;
use crate::utils::error::{StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::future::ready;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

const DEFAULT_PAGE_SIZE: usize = 100;

/// In-memory `PersonStore` for tests and local runs.
///
/// Records are kept ordered by id and listed page by page, the same way a
/// table scan hands them back.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    people: Arc<RwLock<BTreeMap<String, Person>>>,
    page_size: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            people: Arc::new(RwLock::new(BTreeMap::new())),
            page_size: page_size.max(1),
        }
    }

    pub async fn len(&self) -> usize {
        self.people.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.people.read().await.is_empty()
    }
}

#[async_trait]
impl PersonStore for InMemoryStore {
    async fn fetch(&self, id: &str) -> StoreResult<Option<Person>> {
        Ok(self.people.read().await.get(id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Person>> {
        let people = self.people.read().await;
        let page_size = self.page_size;

        collect_pages(|after: Option<String>| {
            let items: Vec<Person> = people
                .values()
                .skip_while(|person| after.as_ref().is_some_and(|last| person.id <= *last))
                .take(page_size)
                .cloned()
                .collect();
            let next = if items.len() == page_size {
                items.last().map(|person| person.id.clone())
            } else {
                None
            };
            ready(Ok::<_, StoreError>(Page { items, next }))
        })
        .await
    }

    async fn insert(&self, name: &str) -> StoreResult<Person> {
        let person = Person {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        };

        let mut people = self.people.write().await;
        if people.contains_key(&person.id) {
            return Err(StoreError::Sdk {
                operation: "PutItem",
                message: format!("id {} already exists", person.id),
            });
        }
        people.insert(person.id.clone(), person.clone());
        Ok(person)
    }

    async fn remove(&self, id: &str) -> StoreResult<Option<Person>> {
        Ok(self.people.write().await.remove(id))
    }

    async fn rename(&self, id: &str, name: &str) -> StoreResult<Option<Person>> {
        let mut people = self.people.write().await;
        Ok(people.get_mut(id).map(|person| {
            person.name = name.to_string();
            person.clone()
        }))
    }
}
