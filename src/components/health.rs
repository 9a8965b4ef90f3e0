//! Hit points for damageable entities.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
}

impl Health {
    pub fn new(current: i32) -> Self {
        Self { current }
    }

    /// Subtract `amount` and return what is left.
    pub fn damage(&mut self, amount: i32) -> i32 {
        self.current -= amount;
        self.current
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_reports_remaining() {
        let mut health = Health::new(150);
        assert_eq!(health.damage(100), 50);
        assert!(!health.is_depleted());
        assert_eq!(health.damage(50), 0);
        assert!(health.is_depleted());
    }
}
