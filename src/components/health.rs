//! Health component with clamped damage and heal operations.
//!
//! The invariant `0 <= current <= max` is maintained by [`Health::damage`]
//! and [`Health::heal`]; fields are read-only to keep mutation on those two
//! paths.

/// Current and maximum health of an entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    /// Create a health pool, clamping `current` into `[0, max]`.
    pub fn new(current: f32, max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            current: current.clamp(0.0, max),
            max,
        }
    }

    /// Create a full health pool.
    pub fn full(max: f32) -> Self {
        Self::new(max, max)
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Reduce current health, clamped at zero.
    pub fn damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    /// Restore current health, clamped at max.
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_current_into_range() {
        let health = Health::new(150.0, 100.0);
        assert_eq!(health.current(), 100.0);
        let health = Health::new(-10.0, 100.0);
        assert_eq!(health.current(), 0.0);
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut health = Health::full(50.0);
        health.damage(80.0);
        assert_eq!(health.current(), 0.0);
        assert!(health.is_dead());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut health = Health::new(10.0, 50.0);
        health.heal(100.0);
        assert_eq!(health.current(), 50.0);
        assert!(!health.is_dead());
    }

    #[test]
    fn test_damage_then_heal_partial() {
        let mut health = Health::full(100.0);
        health.damage(30.0);
        health.heal(10.0);
        assert_eq!(health.current(), 80.0);
    }
}
