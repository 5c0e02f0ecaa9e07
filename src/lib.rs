// Library exports for the server binary, integration tests and benchmarks

pub mod api;
pub mod auth;
pub mod config;
pub mod metadata;
pub mod models;
pub mod monitoring;
pub mod routing;
pub mod web;

#[cfg(test)]
pub mod test_utils;
