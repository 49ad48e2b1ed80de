pub mod auth;
pub mod config;
pub mod health;
pub mod meals;
pub mod metrics;
