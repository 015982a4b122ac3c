//! # PeopleSync Infrastructure
//!
//! Impure half of the BambooHR client.
//!
//! This crate contains:
//! - The authenticated HTTP primitive
//! - The BambooHR API client and its iteration entry points
//! - Configuration loading from environment variables and files
//! - Logging initialization
//!
//! ## Architecture
//! - Depends on `peoplesync-domain` for records, errors and configuration
//! - Contains all I/O (network, filesystem, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::bamboohr::BambooHrClient;
