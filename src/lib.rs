pub mod config;
pub mod errors;
pub mod export;
pub mod fetch;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod sources;
pub mod store;
pub mod utils;
pub mod validator;
