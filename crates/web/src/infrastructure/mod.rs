//! Infrastructure adapters (platform providers)

pub mod platform;
