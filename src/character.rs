//! Character controller.
//!
//! Smoothly moves the player avatar toward a commanded target point and
//! turns it to face the direction of travel. Targets are clamped to a
//! circular play area around the origin before they are accepted, so the
//! current position can never be steered outside it.

use glam::Vec3;
use log::debug;
use std::f32::consts::{PI, TAU};

use crate::config::MovementConfig;

/// Remaining distance to the target below which the facing angle is held.
const FACING_THRESHOLD: f32 = 0.01;

/// Smoothed position and facing for the player avatar.
///
/// [`set_target_position`](CharacterController::set_target_position) commands
/// a destination; [`update`](CharacterController::update) moves a fraction of
/// the remaining distance toward it each tick, so the character eases in
/// without overshooting.
#[derive(Debug)]
pub struct CharacterController {
    current: Vec3,
    target: Vec3,
    /// Yaw in radians, measured from +Z toward +X.
    facing: f32,
    config: MovementConfig,
}

impl CharacterController {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            current: Vec3::ZERO,
            target: Vec3::ZERO,
            facing: 0.0,
            config,
        }
    }

    /// Place the character (and its target) at an explicit position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.current = position;
        self.target = position;
        self
    }

    /// Command a destination, clamped to the circular play area.
    ///
    /// A target outside the boundary is projected back onto the circle at
    /// the same ground-plane angle; the vertical component is never clamped.
    pub fn set_target_position(&mut self, x: f32, y: f32, z: f32) {
        let distance = (x * x + z * z).sqrt();
        if distance > self.config.max_distance {
            let angle = z.atan2(x);
            self.target = Vec3::new(
                angle.cos() * self.config.max_distance,
                y,
                angle.sin() * self.config.max_distance,
            );
            debug!("target clamped to play area at angle {angle:.3}");
        } else {
            self.target = Vec3::new(x, y, z);
        }
    }

    /// Advance one tick: ease toward the target and turn toward it.
    pub fn update(&mut self) {
        self.current = self.current.lerp(self.target, self.config.interpolation);

        // Heading comes from the remaining approach vector, so the facing
        // keeps tracking all the way in and only holds inside the deadband
        // (which also guards the zero-length atan2 case).
        let remaining = self.target - self.current;
        if remaining.length() > FACING_THRESHOLD {
            let desired = remaining.x.atan2(remaining.z);
            let delta = wrap_angle(desired - self.facing);
            self.facing += delta * self.config.rotation_speed;
        }
    }

    pub fn position(&self) -> Vec3 {
        self.current
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current yaw in radians.
    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// True while the character is still easing toward its target.
    pub fn is_moving(&self) -> bool {
        self.current.distance(self.target) > FACING_THRESHOLD
    }
}

/// Wrap an angle into (-PI, PI] so turns always take the shortest arc.
fn wrap_angle(mut angle: f32) -> f32 {
    while angle > PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}
