use crate::domain::city::repository::CityRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub cities: Arc<dyn CityRepository>,
}

impl AppState {
    pub fn new(cities: Arc<dyn CityRepository>) -> Self {
        Self { cities }
    }
}
