pub mod in_memory_city_repository;
