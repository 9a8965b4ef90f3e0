//! Per-entity pipeline stages run by the
//! [`EntityManager`](crate::entity::EntityManager).
//!
//! Submodules overview
//! - [`animation`] – advance animation playback
//! - [`collision`] – collision box sync and overlap tests
//! - [`movement`] – integrate velocity and position
//! - [`render`] – draw the sprite or animation of an entity
//! - [`time`] – advance the simulation clock

pub mod animation;
pub mod collision;
pub mod movement;
pub mod render;
pub mod time;
