//! Application services
//!
//! This module contains application services that implement use cases
//! for the adgorithm client. Services depend on port traits, not concrete
//! infrastructure implementations.

pub mod auth_service;
pub mod chat_service;

pub use auth_service::{AuthService, DUMMY_TOKEN};
pub use chat_service::deliver_chain;
