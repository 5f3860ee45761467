pub mod entity;
pub mod gateway;
