use crate::domain::city::{
    CITY_NOT_FOUND,
    entity::{City, CityPayload},
    errors::DomainError,
    repository::CityRepository,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

struct Store {
    cities: Vec<City>,
    next_id: u64,
}

/// Process-lifetime city store.
///
/// Cities are kept in insertion order. Ids come from a counter that only
/// moves forward, so an id freed by a delete is never handed out again.
/// One lock covers both the collection and the counter, which serializes
/// every handler's read-modify-write on the store.
pub struct InMemoryCityRepository {
    store: RwLock<Store>,
}

impl InMemoryCityRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                cities: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryCityRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found() -> DomainError {
    DomainError::NotFound(CITY_NOT_FOUND.to_string())
}

#[async_trait]
impl CityRepository for InMemoryCityRepository {
    async fn find_all(&self) -> Result<Vec<City>, DomainError> {
        Ok(self.store.read().await.cities.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<City>, DomainError> {
        let store = self.store.read().await;
        Ok(store.cities.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, payload: CityPayload) -> Result<City, DomainError> {
        let mut store = self.store.write().await;
        let city = City::new(store.next_id, payload);
        store.next_id += 1;
        store.cities.push(city.clone());
        Ok(city)
    }

    async fn replace(&self, id: u64, payload: CityPayload) -> Result<City, DomainError> {
        let mut store = self.store.write().await;
        let city = store
            .cities
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(not_found)?;
        city.replace_attributes(payload);
        Ok(city.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        let index = store
            .cities
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(not_found)?;
        // Vec::remove shifts the tail, keeping relative order.
        store.cities.remove(index);
        Ok(())
    }
}
