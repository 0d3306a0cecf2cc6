pub mod auth;
pub mod career;
pub mod config;
pub mod courses;
pub mod dashboard;
pub mod notifications;
pub mod output;
pub mod profile;
pub mod quiz;
pub mod routes;
pub mod store;
