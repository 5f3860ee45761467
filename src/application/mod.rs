pub mod favorites;
pub mod search_cities;
