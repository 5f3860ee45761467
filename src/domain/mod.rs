pub mod city;
pub mod shared;
pub mod weather;
