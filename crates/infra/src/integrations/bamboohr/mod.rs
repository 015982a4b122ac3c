//! BambooHR REST API integration
//!
//! Sequential, single-shot GET calls against the BambooHR gateway. Records are
//! handed to a caller-supplied iteratee one at a time; each iteratee future is
//! awaited before the next record is produced.
//!
//! # Error policy
//!
//! - Authentication probe failures are wrapped into
//!   [`peoplesync_domain::AuthenticationError`].
//! - User, directory and details paths propagate transport and decode errors.
//! - File listings answered with a non-2xx status iterate nothing.

pub mod auth;
pub mod client;

pub use client::BambooHrClient;
