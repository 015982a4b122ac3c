//! Pure helpers shared by the domain types

pub mod namespace;
pub mod serde;
