//! Logging setup for binaries embedding the client
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the process that owns `main`.

pub mod logging;

pub use logging::init_tracing;
