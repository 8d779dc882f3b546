//! src/lib.rs
pub mod configuration;
pub mod domain;
pub mod error;
pub mod form;
pub mod page;
pub mod telemetry;
pub mod terminal;
