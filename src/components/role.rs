//! Closed set of gameplay roles.
//!
//! Collision reactions are decided by asking which [`Role`] the other
//! participant carries, instead of inspecting its concrete behavior type.

use bevy_ecs::prelude::Component;

/// Side an entity fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Faction {
    Player,
    Enemy,
}

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Player,
    Enemy,
    /// Bullet fired by `faction`.
    Projectile { faction: Faction },
    /// Player-owned beam. Damages each enemy at most once.
    Tracer,
    PowerUp,
    #[default]
    Neutral,
}

impl Role {
    pub fn is_hostile_to_player(&self) -> bool {
        matches!(
            self,
            Role::Enemy
                | Role::Projectile {
                    faction: Faction::Enemy
                }
        )
    }

    pub fn is_player_weapon(&self) -> bool {
        matches!(
            self,
            Role::Tracer
                | Role::Projectile {
                    faction: Faction::Player
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostility_follows_faction() {
        assert!(Role::Enemy.is_hostile_to_player());
        assert!(
            Role::Projectile {
                faction: Faction::Enemy
            }
            .is_hostile_to_player()
        );
        assert!(
            !Role::Projectile {
                faction: Faction::Player
            }
            .is_hostile_to_player()
        );
        assert!(!Role::PowerUp.is_hostile_to_player());
    }

    #[test]
    fn test_player_weapons() {
        assert!(Role::Tracer.is_player_weapon());
        assert!(
            Role::Projectile {
                faction: Faction::Player
            }
            .is_player_weapon()
        );
        assert!(!Role::Enemy.is_player_weapon());
        assert_eq!(Role::default(), Role::Neutral);
    }
}
