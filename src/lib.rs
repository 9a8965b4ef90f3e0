//! Blastius simulation core.
//!
//! A fixed-timestep 2D arcade shooter core: an entity population with
//! kinematics, collision and depth-sorted drawing, and a state machine
//! choosing which application mode owns the frame.
//!
//! - [`entity`] – entity hooks, builder and the population manager
//! - [`state`] – state contract and the name-keyed state manager
//! - [`entities`] – player, enemies, projectiles and pickups
//! - [`states`] – loading, menu, game, game over and editor modes
//! - [`game`] – the fixed-step driver
//! - [`context`] – explicit application context handed to every hook

pub mod components;
pub mod context;
pub mod entities;
pub mod entity;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod resources;
pub mod state;
pub mod states;
pub mod surface;
pub mod systems;
