//! Core data model for the MIDI control chart generator.

pub mod error;
pub mod mapping;

pub use error::{ChartError, Result};
pub use mapping::{Chart, Mapping};
