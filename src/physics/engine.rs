//! Physics engine: integration, collision resolution, raycasts.
//!
//! One [`PhysicsEngine::update`] call advances all non-static bodies by a
//! discrete step, then scans every unordered body pair once and resolves
//! sphere-sphere overlaps with an impulse. Forces are impulse-per-frame:
//! accumulated acceleration is consumed and reset each step.

use glam::Vec3;
use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::physics::body::PhysicsBody;

const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);

#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Mass must be strictly positive; the engine divides by it.
    #[error("physics body '{id}' has non-positive mass {mass}")]
    NonPositiveMass { id: String, mass: f32 },
}

/// Closest body hit by a raycast.
#[derive(Clone, Debug, PartialEq)]
pub struct RaycastHit {
    pub id: String,
    pub distance: f32,
}

/// Body counts, split by static flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhysicsStats {
    pub body_count: usize,
    pub static_bodies: usize,
    pub dynamic_bodies: usize,
}

/// Owner of the body table; the only code that mutates bodies during a tick.
///
/// Bodies are stored in insertion order so pair scans and raycasts are
/// deterministic. Lifetime is entirely explicit: [`add_body`] /
/// [`remove_body`] are the only entry and exit points.
///
/// [`add_body`]: PhysicsEngine::add_body
/// [`remove_body`]: PhysicsEngine::remove_body
pub struct PhysicsEngine {
    bodies: Vec<PhysicsBody>,
    index: FxHashMap<String, usize>,
    gravity: Vec3,
    enabled: bool,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY)
    }
}

impl PhysicsEngine {
    pub fn new(gravity: Vec3) -> Self {
        Self {
            bodies: Vec::new(),
            index: FxHashMap::default(),
            gravity,
            enabled: true,
        }
    }

    /// Add a body, replacing any existing body with the same id.
    ///
    /// Rejects non-positive mass so division by mass is always defined.
    pub fn add_body(&mut self, body: PhysicsBody) -> Result<(), PhysicsError> {
        if body.mass <= 0.0 {
            return Err(PhysicsError::NonPositiveMass {
                id: body.id.clone(),
                mass: body.mass,
            });
        }
        debug!("physics body added: {}", body.id);
        match self.index.get(&body.id) {
            Some(&slot) => self.bodies[slot] = body,
            None => {
                self.index.insert(body.id.clone(), self.bodies.len());
                self.bodies.push(body);
            }
        }
        Ok(())
    }

    /// Remove a body. No-op if the id is unknown.
    pub fn remove_body(&mut self, id: &str) {
        let Some(slot) = self.index.remove(id) else {
            return;
        };
        self.bodies.swap_remove(slot);
        if let Some(moved) = self.bodies.get(slot) {
            self.index.insert(moved.id.clone(), slot);
        }
        debug!("physics body removed: {id}");
    }

    pub fn body(&self, id: &str) -> Option<&PhysicsBody> {
        self.index.get(id).map(|&slot| &self.bodies[slot])
    }

    pub fn body_mut(&mut self, id: &str) -> Option<&mut PhysicsBody> {
        let slot = *self.index.get(id)?;
        Some(&mut self.bodies[slot])
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn stats(&self) -> PhysicsStats {
        let static_bodies = self.bodies.iter().filter(|b| b.is_static).count();
        PhysicsStats {
            body_count: self.bodies.len(),
            static_bodies,
            dynamic_bodies: self.bodies.len() - static_bodies,
        }
    }

    /// Drop every body.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.index.clear();
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    /// Pause or resume the whole engine; a disabled engine ignores `update`.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Advance the simulation by `dt` seconds and resolve overlaps.
    pub fn update(&mut self, dt: f32) {
        if !self.enabled {
            return;
        }

        for body in &mut self.bodies {
            if body.is_static {
                continue;
            }
            body.acceleration += self.gravity;
            body.velocity += body.acceleration * dt;
            // Damping factor floors at zero so friction can slow a body to a
            // stop but never reverse it.
            body.velocity *= (1.0 - body.friction * dt).max(0.0);
            body.position += body.velocity * dt;
            body.acceleration = Vec3::ZERO;
        }

        self.detect_collisions();
    }

    /// Examine every unordered pair once; static-static pairs are skipped.
    fn detect_collisions(&mut self) {
        let count = self.bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                if self.bodies[i].is_static && self.bodies[j].is_static {
                    continue;
                }
                let distance = self.bodies[i].position.distance(self.bodies[j].position);
                let min_distance = self.bodies[i].radius + self.bodies[j].radius;
                if distance < min_distance {
                    self.resolve_collision(i, j, distance, min_distance);
                }
            }
        }
    }

    fn resolve_collision(&mut self, i: usize, j: usize, distance: f32, min_distance: f32) {
        // i < j always holds here, so the split cleanly yields both bodies.
        let (head, tail) = self.bodies.split_at_mut(j);
        let a = &mut head[i];
        let b = &mut tail[0];

        // Coincident centers have no defined normal; push along +X.
        let normal = (b.position - a.position).normalize_or(Vec3::X);

        let overlap = min_distance - distance;
        let separation = normal * (overlap * 0.5);
        if !a.is_static {
            a.position -= separation;
        }
        if !b.is_static {
            b.position += separation;
        }

        let relative_velocity = b.velocity - a.velocity;
        let velocity_along_normal = relative_velocity.dot(normal);

        // Already separating: no impulse, no callbacks, avoids sticking.
        if velocity_along_normal > 0.0 {
            return;
        }

        let restitution = a.restitution.min(b.restitution);
        let impulse_scalar = -(1.0 + restitution) * velocity_along_normal;
        let total_mass = if a.is_static {
            b.mass
        } else if b.is_static {
            a.mass
        } else {
            a.mass + b.mass
        };
        let impulse = normal * (impulse_scalar / total_mass);

        if !a.is_static {
            a.velocity -= impulse * b.mass;
        }
        if !b.is_static {
            b.velocity += impulse * a.mass;
        }

        debug!("collision: {} <-> {}", a.id, b.id);

        // Each callback is taken out of its body for the call so the other
        // body can be borrowed immutably.
        if let Some(mut callback) = a.on_collision.take() {
            callback(b);
            a.on_collision = Some(callback);
        }
        if let Some(mut callback) = b.on_collision.take() {
            callback(a);
            b.on_collision = Some(callback);
        }
    }

    /// Accumulate `force / mass` into a body's acceleration.
    ///
    /// No-op if the id is unknown or the body is static.
    pub fn apply_force(&mut self, id: &str, force: Vec3) {
        if let Some(body) = self.body_mut(id) {
            if !body.is_static {
                body.acceleration += force / body.mass;
            }
        }
    }

    /// Change a body's velocity directly by `impulse / mass`.
    ///
    /// No-op if the id is unknown or the body is static.
    pub fn apply_impulse(&mut self, id: &str, impulse: Vec3) {
        if let Some(body) = self.body_mut(id) {
            if !body.is_static {
                body.velocity += impulse / body.mass;
            }
        }
    }

    /// Closest sphere intersection along a ray, via the quadratic formula.
    ///
    /// Only intersections with `0 < t < max_distance` count; `direction`
    /// does not need to be normalized.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RaycastHit> {
        let mut closest: Option<RaycastHit> = None;
        let mut closest_distance = max_distance;

        for body in &self.bodies {
            let oc = origin - body.position;
            let a = direction.dot(direction);
            let b = 2.0 * oc.dot(direction);
            let c = oc.dot(oc) - body.radius * body.radius;
            let discriminant = b * b - 4.0 * a * c;

            if discriminant >= 0.0 {
                let distance = (-b - discriminant.sqrt()) / (2.0 * a);
                if distance > 0.0 && distance < closest_distance {
                    closest_distance = distance;
                    closest = Some(RaycastHit {
                        id: body.id.clone(),
                        distance,
                    });
                }
            }
        }

        closest
    }
}
