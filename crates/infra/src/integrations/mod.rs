//! External service integrations

pub mod bamboohr;
