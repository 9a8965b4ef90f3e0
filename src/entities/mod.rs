//! Gameplay entities.
//!
//! Each module provides an [`EntityBehavior`](crate::entity::EntityBehavior)
//! and a `spawn` constructor returning the configured
//! [`EntityBuilder`](crate::entity::EntityBuilder).

pub mod bullet;
pub mod enemy;
pub mod gameovertimer;
pub mod player;
pub mod powerup;
pub mod tracer;

pub use bullet::Bullet;
pub use enemy::Enemy;
pub use gameovertimer::GameOverTimer;
pub use player::Player;
pub use powerup::PowerUp;
pub use tracer::Tracer;
