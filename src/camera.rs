//! Camera rig.
//!
//! Two modes share one controller: follow mode trails a tracked point at a
//! fixed offset, free mode orbits it on a sphere driven by drag, wheel and
//! pinch gestures. Both modes smooth toward their ideal position so mode
//! switches and target jumps ease in rather than cut.

use glam::Vec3;
use log::debug;
use std::f32::consts::PI;

use crate::config::{CameraConfig, ControlsConfig};

/// Polar angle margin keeping the orbit away from the poles.
const PHI_EPSILON: f32 = 0.1;
/// The look-at point sits this far above the tracked point.
const LOOK_AT_HEIGHT: f32 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    Follow,
    Free,
}

/// Camera placement for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Perspective projection parameters for the render layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// One active touch contact in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    fn distance(self, other: TouchPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Gesture-driven orbit camera with a follow fallback.
///
/// Gestures only steer the orbit in [`CameraMode::Free`]; follow mode
/// ignores them entirely. All angles are radians.
pub struct CameraController {
    mode: CameraMode,
    /// Azimuth around the tracked point.
    theta: f32,
    /// Polar angle, clamped to [PHI_EPSILON, PI - PHI_EPSILON].
    phi: f32,
    /// Orbit radius, clamped to the configured distance range.
    radius: f32,
    position: Vec3,
    look_at: Vec3,
    aspect: f32,
    dragging: bool,
    last_pointer: (f32, f32),
    last_touch_distance: Option<f32>,
    config: CameraConfig,
    controls: ControlsConfig,
}

impl CameraController {
    pub fn new(config: CameraConfig, controls: ControlsConfig) -> Self {
        Self {
            mode: CameraMode::Follow,
            theta: config.free_theta,
            phi: config
                .free_phi
                .clamp(PHI_EPSILON, PI - PHI_EPSILON),
            radius: config
                .free_distance
                .clamp(config.min_distance, config.max_distance),
            position: config.follow_offset,
            look_at: Vec3::new(0.0, LOOK_AT_HEIGHT, 0.0),
            aspect: 16.0 / 9.0,
            dragging: false,
            last_pointer: (0.0, 0.0),
            last_touch_distance: None,
            config,
            controls,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            debug!("camera mode: {mode:?}");
        }
        self.mode = mode;
        self.dragging = false;
        self.last_touch_distance = None;
    }

    /// Switch to the other mode and return it.
    pub fn toggle_mode(&mut self) -> CameraMode {
        let next = match self.mode {
            CameraMode::Follow => CameraMode::Free,
            CameraMode::Free => CameraMode::Follow,
        };
        self.set_mode(next);
        next
    }

    /// Free mode claims the secondary button, so the host should suppress
    /// its context menu while orbiting.
    pub fn suppresses_context_menu(&self) -> bool {
        self.mode == CameraMode::Free
    }

    pub fn pointer_down(&mut self, button: PointerButton, x: f32, y: f32) {
        if self.mode != CameraMode::Free {
            return;
        }
        if matches!(button, PointerButton::Primary | PointerButton::Secondary) {
            self.dragging = true;
            self.last_pointer = (x, y);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.mode != CameraMode::Free || !self.dragging {
            return;
        }
        let dx = x - self.last_pointer.0;
        let dy = y - self.last_pointer.1;
        self.last_pointer = (x, y);
        self.rotate(dx, dy, self.controls.mouse_sensitivity);
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Mouse wheel zoom; positive `delta` moves the camera away.
    pub fn wheel(&mut self, delta: f32) {
        if self.mode != CameraMode::Free {
            return;
        }
        self.radius = (self.radius + delta * self.controls.zoom_sensitivity)
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        if self.mode != CameraMode::Free {
            return;
        }
        match touches {
            [single] => {
                self.dragging = true;
                self.last_pointer = (single.x, single.y);
                self.last_touch_distance = None;
            }
            [a, b, ..] => {
                // A second finger suspends rotation for the pinch.
                self.dragging = false;
                self.last_touch_distance = Some(a.distance(*b));
            }
            [] => {}
        }
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) {
        if self.mode != CameraMode::Free {
            return;
        }
        match touches {
            [single] if self.dragging => {
                let dx = single.x - self.last_pointer.0;
                let dy = single.y - self.last_pointer.1;
                self.last_pointer = (single.x, single.y);
                self.rotate(dx, dy, self.controls.touch_sensitivity);
            }
            [a, b, ..] => {
                let distance = a.distance(*b);
                if let Some(last) = self.last_touch_distance {
                    let spread = distance - last;
                    self.radius = (self.radius - spread * self.controls.pinch_sensitivity)
                        .clamp(self.config.min_distance, self.config.max_distance);
                }
                self.last_touch_distance = Some(distance);
            }
            _ => {}
        }
    }

    /// Any touch lift ends the gesture; rotation resumes only on a fresh
    /// [`touch_start`](CameraController::touch_start).
    pub fn touch_end(&mut self) {
        self.dragging = false;
        self.last_touch_distance = None;
    }

    fn rotate(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.theta -= dx * sensitivity;
        self.phi = (self.phi - dy * sensitivity).clamp(PHI_EPSILON, PI - PHI_EPSILON);
    }

    /// Advance one tick toward the ideal placement for `tracked`.
    pub fn update(&mut self, tracked: Vec3) {
        let (ideal, factor) = match self.mode {
            CameraMode::Follow => (
                tracked + self.config.follow_offset,
                self.config.follow_interpolation,
            ),
            CameraMode::Free => {
                let offset = Vec3::new(
                    self.radius * self.phi.sin() * self.theta.cos(),
                    self.radius * self.phi.cos(),
                    self.radius * self.phi.sin() * self.theta.sin(),
                );
                (tracked + offset, self.config.free_interpolation)
            }
        };
        self.position = self.position.lerp(ideal, factor);
        self.look_at = tracked + Vec3::new(0.0, LOOK_AT_HEIGHT, 0.0);
    }

    /// Update the projection aspect ratio; zero-sized viewports are ignored.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            look_at: self.look_at,
        }
    }

    pub fn projection(&self) -> Projection {
        Projection {
            fov_y_degrees: self.config.fov,
            aspect: self.aspect,
            near: self.config.near,
            far: self.config.far,
        }
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn phi(&self) -> f32 {
        self.phi
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}
