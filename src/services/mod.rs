pub mod auth;
pub mod config;
pub mod meals;
pub mod metrics;
pub mod validation;
