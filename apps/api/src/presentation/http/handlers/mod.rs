pub mod cities;
pub mod docs;
pub mod health;
