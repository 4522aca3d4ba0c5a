pub mod configuration;
pub mod domain;
pub mod mail;
pub mod repository;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod use_cases;
