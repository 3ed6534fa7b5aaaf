pub mod api;
pub mod budget;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod reporting;
pub mod scoring;
pub mod sites;
