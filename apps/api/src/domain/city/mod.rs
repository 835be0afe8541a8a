pub mod entity;
pub mod errors;
pub mod repository;

pub const CITY_NOT_FOUND: &str = "City not found";
