//! Data Models
//!
//! Contains the configuration structures used by the application.

pub mod settings;

pub use settings::*;
