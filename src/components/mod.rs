//! Entity components.
//!
//! Every managed entity carries the core set (position, body, collider,
//! depth, lifecycle, role). The rest is attached per entity by the
//! [`EntityBuilder`](crate::entity::EntityBuilder).
//!
//! Submodules overview:
//! - [`animation`] – playback state of a keyed animation (animated visual)
//! - [`boxcollider`] – axis-aligned collision box offset from the position
//! - [`depth`] – draw order, higher values first
//! - [`health`] – hit points of damageable entities
//! - [`lifecycle`] – destroyed flag and pending destroy hook
//! - [`mapposition`] – world-space position of an entity
//! - [`persistent`] – marker for entities that survive a non-forced clear
//! - [`rigidbody`] – velocity and constant acceleration
//! - [`role`] – gameplay role used to decide collision reactions
//! - [`sprite`] – textured visual

pub mod animation;
pub mod boxcollider;
pub mod depth;
pub mod health;
pub mod lifecycle;
pub mod mapposition;
pub mod persistent;
pub mod rigidbody;
pub mod role;
pub mod sprite;
