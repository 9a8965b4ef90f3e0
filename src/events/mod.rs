//! Messages sent out of the simulation core.
//!
//! Submodules:
//! - [`audio`] – commands for the audio player
pub mod audio;
