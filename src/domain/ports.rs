use crate::domain::model::Person;
use crate::utils::error::StoreResult;
use async_trait::async_trait;

/// Persistence port for people, addressed only by `id`.
///
/// "Not found" is `Ok(None)`, never an error. Implementations are shared by
/// every invocation and must not carry request state.
#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn fetch(&self, id: &str) -> StoreResult<Option<Person>>;

    /// Every record, following continuation tokens until the table is
    /// exhausted. A failing page fails the whole call.
    async fn list(&self) -> StoreResult<Vec<Person>>;

    /// Writes a new record under a freshly generated id.
    async fn insert(&self, name: &str) -> StoreResult<Person>;

    /// Deletes the record and returns its value before deletion.
    async fn remove(&self, id: &str) -> StoreResult<Option<Person>>;

    /// Sets `name` only if the record exists; returns the updated record.
    async fn rename(&self, id: &str, name: &str) -> StoreResult<Option<Person>>;
}
