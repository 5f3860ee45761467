pub mod cities;
pub mod favorites;
pub mod health;
pub mod weather;
