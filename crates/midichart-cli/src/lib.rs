//! CLI library components for the MIDI control chart generator.

pub mod logging;
pub mod pipeline;
