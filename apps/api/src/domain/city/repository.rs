use super::entity::{City, CityPayload};
use super::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// All cities in insertion order.
    async fn find_all(&self) -> Result<Vec<City>, DomainError>;
    async fn find_by_id(&self, id: u64) -> Result<Option<City>, DomainError>;
    /// Assign the next id and append to the end of the collection.
    async fn create(&self, payload: CityPayload) -> Result<City, DomainError>;
    /// Full replace of every field except `id`.
    async fn replace(&self, id: u64, payload: CityPayload) -> Result<City, DomainError>;
    async fn delete(&self, id: u64) -> Result<(), DomainError>;
}
