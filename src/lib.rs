pub mod config;
pub mod corpus;
pub mod error;
pub mod generator;
pub mod models;
pub mod store;
