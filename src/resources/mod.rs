//! Long-lived data shared through the [`AppContext`](crate::context::AppContext).
//!
//! Overview
//! - `assetstore` – texture, animation and sound keys the game may use
//! - `audio` – command channel to the audio player
//! - `fixedstep` – fixed-timestep accumulator of the driver
//! - `formation` – spawn records and the formation directory
//! - `gameconfig` – loop, playfield and window settings from an INI file
//! - `gamestate` – pending state transition request
//! - `input` – per-step state of the game's input actions
//! - `screensize` – last viewport size
//! - `worldsignals` – scores, flags and entity handles shared between states
//! - `worldtime` – simulation time and delta
pub mod assetstore;
pub mod audio;
pub mod fixedstep;
pub mod formation;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod screensize;
pub mod worldsignals;
pub mod worldtime;
