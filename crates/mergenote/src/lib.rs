pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod orchestrator;
pub mod provider;
pub mod pull_request;
pub mod sink;
