//! Application layer: use cases over the platform ports

pub mod services;
