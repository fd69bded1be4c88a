pub mod configuration;
pub mod content_cache;
pub mod content_store;
pub mod domain;
pub mod email_client;
pub mod routes;
pub mod startup;
pub mod telemetry;
