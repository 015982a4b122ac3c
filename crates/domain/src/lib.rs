//! # PeopleSync Domain
//!
//! Business domain types for the BambooHR client.
//!
//! This crate contains:
//! - Provider record types (users, employees, files)
//! - Domain error types and Result definitions
//! - Client configuration
//! - Provider constants and the namespace normalizer
//!
//! ## Architecture
//! - No dependencies on other PeopleSync crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::namespace::parse_namespace;
