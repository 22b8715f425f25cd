//! Core type aliases

/// Standard Result type for the crate
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
