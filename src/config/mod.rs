//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are passed into the components that need them at construction
//! time; there is no process-wide settings global.

mod settings;

pub use settings::*;
