pub mod ai;
pub mod config;
pub mod languages;
pub mod products;
pub mod translations;
pub mod utils;
