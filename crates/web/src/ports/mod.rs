//! Port definitions for the web client.

pub mod outbound;
