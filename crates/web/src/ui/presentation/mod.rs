//! Presentation layer: shared state, components and routed views

pub mod components;
pub mod state;
pub mod views;
