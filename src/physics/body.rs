//! Sphere physics body.
//!
//! A [`PhysicsBody`] holds the full dynamic state of one simulated sphere.
//! It is mutated only by the engine's update pass or by explicit
//! force/impulse application; the engine never creates or destroys bodies on
//! its own.

use glam::Vec3;

/// Callback invoked with the other participant when this body collides.
pub type CollisionCallback = Box<dyn FnMut(&PhysicsBody)>;

/// One simulated sphere.
///
/// `mass` must be strictly positive; [`PhysicsEngine::add_body`] rejects
/// anything else so the engine never divides by an invalid mass.
/// `restitution` and `friction` are clamped into [0, 1] by the builder
/// setters.
///
/// [`PhysicsEngine::add_body`]: crate::physics::engine::PhysicsEngine::add_body
pub struct PhysicsBody {
    pub id: String,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub mass: f32,
    pub radius: f32,
    /// Static bodies never move and absorb no impulses.
    pub is_static: bool,
    /// Bounce coefficient in [0, 1]; a pair uses the minimum of the two.
    pub restitution: f32,
    /// Velocity damping coefficient in [0, 1], applied as `v *= 1 - f*dt`.
    pub friction: f32,
    pub on_collision: Option<CollisionCallback>,
}

impl PhysicsBody {
    /// Create a dynamic unit-mass body at rest.
    pub fn new(id: impl Into<String>, position: Vec3, radius: f32) -> Self {
        Self {
            id: id.into(),
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            mass: 1.0,
            radius,
            is_static: false,
            restitution: 0.5,
            friction: 0.0,
            on_collision: None,
        }
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Mark the body as static: it never moves and ignores forces.
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.clamp(0.0, 1.0);
        self
    }

    pub fn with_collision_callback(mut self, callback: CollisionCallback) -> Self {
        self.on_collision = Some(callback);
        self
    }
}

impl std::fmt::Debug for PhysicsBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhysicsBody")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("acceleration", &self.acceleration)
            .field("mass", &self.mass)
            .field("radius", &self.radius)
            .field("is_static", &self.is_static)
            .field("restitution", &self.restitution)
            .field("friction", &self.friction)
            .field("on_collision", &self.on_collision.as_ref().map(|_| "fn"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_defaults() {
        let body = PhysicsBody::new("ball", Vec3::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(body.id, "ball");
        assert_eq!(body.velocity, Vec3::ZERO);
        assert_eq!(body.acceleration, Vec3::ZERO);
        assert_eq!(body.mass, 1.0);
        assert!(!body.is_static);
        assert!(body.on_collision.is_none());
    }

    #[test]
    fn test_builder_clamps_coefficients() {
        let body = PhysicsBody::new("b", Vec3::ZERO, 1.0)
            .with_restitution(1.8)
            .with_friction(-0.3);
        assert_eq!(body.restitution, 1.0);
        assert_eq!(body.friction, 0.0);
    }

    #[test]
    fn test_with_static_flags_body() {
        let body = PhysicsBody::new("wall", Vec3::ZERO, 2.0).with_static();
        assert!(body.is_static);
    }
}
